//! Checkout request and payload types.
//!
//! Field names follow the Monnify Web SDK, so every type serializes with
//! camelCase keys and round-trips the SDK's JSON payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use yew::Callback;

/// Payment channels the hosted checkout can offer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    AccountTransfer,
    Ussd,
    PhoneNumber,
}

/// One rule for splitting the collected amount with a sub-account.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSplitConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_bearer: Option<bool>,
}

/// Everything the SDK needs to start a checkout.
///
/// `payment_description` is optional in the type but required by
/// [`validate_request`](crate::validate_request).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutParams {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub customer_full_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub contract_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, JsonValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_split_config: Option<Vec<IncomeSplitConfig>>,
}

impl CheckoutParams {
    pub fn new(
        amount: f64,
        customer_full_name: impl Into<String>,
        customer_email: impl Into<String>,
        contract_code: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            customer_full_name: customer_full_name.into(),
            customer_email: customer_email.into(),
            contract_code: contract_code.into(),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_payment_description(mut self, description: impl Into<String>) -> Self {
        self.payment_description = Some(description.into());
        self
    }

    pub fn with_payment_methods(mut self, methods: impl IntoIterator<Item = PaymentMethod>) -> Self {
        self.payment_methods = Some(methods.into_iter().collect());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, JsonValue>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_income_split(mut self, rules: Vec<IncomeSplitConfig>) -> Self {
        self.income_split_config = Some(rules);
        self
    }
}

/// Transaction status reported by the SDK.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayStatus {
    Paid,
    UserCancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Payload delivered to `on_success` when the SDK reports completion.
///
/// Missing fields fall back to defaults; fields this type does not model
/// are kept in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutResponse {
    pub amount: f64,
    pub amount_paid: f64,
    pub completed: bool,
    pub completed_on: String,
    pub created_on: String,
    pub currency_code: String,
    pub customer_email: String,
    pub customer_name: String,
    pub fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Map<String, JsonValue>>,
    pub payable_amount: f64,
    pub payment_method: String,
    pub payment_reference: String,
    pub payment_status: PayStatus,
    pub transaction_reference: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Payload delivered to `on_close` when the SDK closes its checkout.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CloseEvent {
    pub authorized_amount: f64,
    pub payment_status: PayStatus,
    pub redirect_url: Option<String>,
    pub response_code: PayStatus,
    pub response_message: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Payload delivered to `on_error`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CheckoutFailure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl CheckoutFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// One checkout attempt: parameters plus the callbacks that receive its outcome.
///
/// The callbacks are optional in the type so that a missing one is reported
/// as a validation error instead of a compile error at the call site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutRequest {
    pub checkout_params: CheckoutParams,
    pub on_success: Option<Callback<CheckoutResponse>>,
    pub on_close: Option<Callback<Option<CloseEvent>>>,
    pub on_error: Option<Callback<CheckoutFailure>>,
}

impl CheckoutRequest {
    pub fn new(checkout_params: CheckoutParams) -> Self {
        Self {
            checkout_params,
            ..Self::default()
        }
    }

    pub fn on_success(mut self, cb: Callback<CheckoutResponse>) -> Self {
        self.on_success = Some(cb);
        self
    }

    pub fn on_close(mut self, cb: Callback<Option<CloseEvent>>) -> Self {
        self.on_close = Some(cb);
        self
    }

    pub fn on_error(mut self, cb: Callback<CheckoutFailure>) -> Self {
        self.on_error = Some(cb);
        self
    }
}
