//! Generation of the self-contained checkout document loaded into the frame.
//!
//! The document pulls in the Monnify Web SDK, declares a `monnifyConfig`
//! literal built from the checkout parameters, and polls until `MonnifySDK`
//! exists before handing it the config. SDK callbacks are forwarded to the
//! host window as `{ "event": ..., "data": ... }` JSON strings.
//!
//! String parameters are embedded verbatim between double quotes. Nothing is
//! escaped, so parameters must not carry untrusted markup or script.

use serde::Serialize;

use crate::config::CheckoutConfig;
use crate::types::CheckoutParams;

/// Rendered when there is no request to show.
pub const PLACEHOLDER_DOCUMENT: &str = "<html></html>";

const ENTRY_INDENT: &str = "            ";

/// Event handlers handed to the SDK. Each one forwards its payload to the host.
const EVENT_HANDLERS: [&str; 4] = [
    "onComplete: function(response) { postToHost(\"onComplete\", response); }",
    "onClose: function(data) { postToHost(\"onClose\", data); }",
    "onLoadStart: function() { postToHost(\"onLoadStart\", null); }",
    "onLoadComplete: function() { postToHost(\"onLoadComplete\", null); }",
];

pub fn placeholder_document() -> &'static str {
    PLACEHOLDER_DOCUMENT
}

/// Build the `monnifyConfig` entries, one `key: value` per item.
///
/// Required entries always come first, then the event handlers, then any
/// optional entry whose field is set.
pub fn config_entries(params: &CheckoutParams, api_key: &str) -> Vec<String> {
    let mut entries = vec![
        format!("apiKey: \"{}\"", api_key),
        format!("amount: {}", params.amount),
        format!("contractCode: \"{}\"", params.contract_code),
        format!(
            "paymentDescription: \"{}\"",
            params.payment_description.as_deref().unwrap_or_default()
        ),
        format!("customerFullName: \"{}\"", params.customer_full_name),
        format!("customerEmail: \"{}\"", params.customer_email),
    ];
    entries.extend(EVENT_HANDLERS.iter().map(|handler| handler.to_string()));

    if let Some(currency) = &params.currency {
        entries.push(format!("currency: \"{}\"", currency));
    }
    if let Some(reference) = &params.reference {
        entries.push(format!("reference: \"{}\"", reference));
    }
    if let Some(methods) = &params.payment_methods {
        entries.push(format!("paymentMethods: {}", json_literal(methods)));
    }
    if let Some(metadata) = &params.metadata {
        entries.push(format!("metadata: {}", json_literal(metadata)));
    }
    if let Some(rules) = &params.income_split_config {
        entries.push(format!("incomeSplitConfig: {}", json_literal(rules)));
    }

    entries
}

/// Render the complete checkout document.
///
/// Output depends only on the inputs: the same parameters and config always
/// produce the same bytes.
pub fn render_document(params: &CheckoutParams, config: &CheckoutConfig) -> String {
    let entries = config_entries(params, &config.api_key).join(&format!(",\n{ENTRY_INDENT}"));

    format!(
        r#"<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script type="text/javascript" src="{sdk_url}"></script>
    <script>
      function postToHost(event, data) {{
        var message = JSON.stringify({{ event: event, data: data === undefined ? null : data }});
        window.parent.postMessage(message, "*");
      }}

      var monnifyConfig = {{
{ENTRY_INDENT}{entries}
      }};

{poll}
      setTimeout(initializeMonnify, {interval});
    </script>
  </head>
  <body style="height:100vh"></body>
</html>
"#,
        title = config.title,
        sdk_url = config.sdk_url,
        poll = poll_routine(config),
        interval = config.poll_interval_ms,
    )
}

/// The readiness loop. Bounded unless `max_poll_attempts` is `None`.
fn poll_routine(config: &CheckoutConfig) -> String {
    let give_up = match config.max_poll_attempts {
        Some(max) => format!(
            r#"        monnifyPollAttempts += 1;
        if (monnifyPollAttempts >= {max}) {{
          postToHost("onLoadError", {{ message: "Monnify SDK did not load after {max} attempts" }});
          return;
        }}
"#
        ),
        None => String::new(),
    };

    format!(
        r#"      var monnifyPollAttempts = 0;

      function initializeMonnify() {{
        if (typeof MonnifySDK !== "undefined") {{
          try {{
            MonnifySDK.initialize(monnifyConfig);
          }} catch (err) {{
            postToHost("onLoadError", {{ message: String(err) }});
          }}
          return;
        }}
{give_up}        setTimeout(initializeMonnify, {interval});
      }}
"#,
        interval = config.poll_interval_ms,
    )
}

fn json_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("could not serialize checkout field: {err}");
        "null".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IncomeSplitConfig, PaymentMethod};
    use serde_json::{json, Map};

    fn minimal_params() -> CheckoutParams {
        CheckoutParams::new(100.0, "John", "johndoe@example.com", "5867418298")
            .with_payment_description("Need")
    }

    fn config() -> CheckoutConfig {
        CheckoutConfig::new("MK_TEST_GC3B8XG2XX")
    }

    const REQUIRED: [&str; 6] = [
        "apiKey: \"MK_TEST_GC3B8XG2XX\"",
        "amount: 100",
        "contractCode: \"5867418298\"",
        "paymentDescription: \"Need\"",
        "customerFullName: \"John\"",
        "customerEmail: \"johndoe@example.com\"",
    ];

    const OPTIONAL_KEYS: [&str; 5] = [
        "currency: ",
        "reference: ",
        "paymentMethods: ",
        "metadata: ",
        "incomeSplitConfig: ",
    ];

    #[test]
    fn required_entries_and_handlers_always_present() {
        let doc = render_document(&minimal_params(), &config());
        for entry in REQUIRED {
            assert!(doc.contains(entry), "missing {entry}");
        }
        for handler in EVENT_HANDLERS {
            assert!(doc.contains(handler));
        }
        for key in OPTIONAL_KEYS {
            assert!(!doc.contains(key), "unexpected {key}");
        }
    }

    #[test]
    fn optional_entries_emitted_only_when_set() {
        let mut metadata = Map::new();
        metadata.insert("orderId".into(), json!("A-1"));
        let params = minimal_params()
            .with_currency("NGN")
            .with_reference("1700000000000")
            .with_payment_methods([PaymentMethod::Card, PaymentMethod::Ussd])
            .with_metadata(metadata)
            .with_income_split(vec![IncomeSplitConfig {
                sub_account_code: Some("MFY_SUB_1".into()),
                fee_percentage: Some(10.5),
                ..Default::default()
            }]);

        let entries = config_entries(&params, "key");
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[10], "currency: \"NGN\"");
        assert_eq!(entries[11], "reference: \"1700000000000\"");
        assert_eq!(entries[12], r#"paymentMethods: ["CARD","USSD"]"#);
        assert_eq!(entries[13], r#"metadata: {"orderId":"A-1"}"#);
        assert_eq!(
            entries[14],
            r#"incomeSplitConfig: [{"subAccountCode":"MFY_SUB_1","feePercentage":10.5}]"#
        );

        // Each optional entry appears on its own.
        let only_reference = config_entries(&minimal_params().with_reference("r-1"), "key");
        assert_eq!(only_reference.len(), 11);
        assert_eq!(only_reference[10], "reference: \"r-1\"");
    }

    #[test]
    fn output_is_deterministic() {
        let mut metadata = Map::new();
        metadata.insert("zeta".into(), json!(1));
        metadata.insert("alpha".into(), json!({ "nested": true }));
        let params = minimal_params().with_metadata(metadata);

        let first = render_document(&params, &config());
        let second = render_document(&params.clone(), &config());
        assert_eq!(first, second);
        assert!(first.contains(r#"metadata: {"alpha":{"nested":true},"zeta":1}"#));
    }

    #[test]
    fn fractional_amount_is_a_bare_number() {
        let mut params = minimal_params();
        params.amount = 2500.75;
        assert_eq!(config_entries(&params, "k")[1], "amount: 2500.75");
    }

    #[test]
    fn strings_are_embedded_verbatim() {
        let params = CheckoutParams::new(5.0, "O'Brien & Sons", "a@b.c", "1")
            .with_payment_description("Rent <March>");
        let doc = render_document(&params, &config());
        assert!(doc.contains("customerFullName: \"O'Brien & Sons\""));
        assert!(doc.contains("paymentDescription: \"Rent <March>\""));
    }

    #[test]
    fn document_loads_sdk_and_posts_to_parent() {
        let doc = render_document(&minimal_params(), &config());
        assert!(doc.contains(r#"<script type="text/javascript" src="https://sdk.monnify.com/plugin/monnify.js"></script>"#));
        assert!(doc.contains("window.parent.postMessage(message, \"*\")"));
        assert!(doc.contains("MonnifySDK.initialize(monnifyConfig)"));
        assert!(doc.contains("setTimeout(initializeMonnify, 500)"));
        assert!(doc.contains("<title>Monnify</title>"));
    }

    #[test]
    fn poll_is_bounded_by_default() {
        let doc = render_document(&minimal_params(), &config());
        assert!(doc.contains("if (monnifyPollAttempts >= 120)"));
        assert!(doc.contains("postToHost(\"onLoadError\""));
    }

    #[test]
    fn poll_can_be_unbounded() {
        let cfg = config().with_max_poll_attempts(None).with_poll_interval_ms(250);
        let doc = render_document(&minimal_params(), &cfg);
        assert!(!doc.contains("monnifyPollAttempts >="));
        assert!(doc.contains("setTimeout(initializeMonnify, 250)"));
    }

    #[test]
    fn example_checkout_document() {
        let params = minimal_params().with_currency("NGN");
        let doc = render_document(&params, &config());
        assert!(doc.contains("amount: 100"));
        assert!(doc.contains("contractCode: \"5867418298\""));
        assert!(!doc.contains("reference: "));
        assert!(!doc.contains("metadata: "));
    }
}
