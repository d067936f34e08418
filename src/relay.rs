//! Messages posted from the checkout frame back to the host.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::RelayError;

/// A decoded `{ "event": ..., "data": ... }` message.
#[derive(Clone, Debug, PartialEq)]
pub enum RelayMessage {
    /// The SDK finished a transaction.
    Complete(JsonValue),
    /// The SDK closed its checkout, with or without a payload.
    Close(JsonValue),
    LoadStart,
    LoadComplete,
    /// The SDK never became ready, or threw while initializing.
    LoadError(JsonValue),
    /// Any tag this crate does not act on.
    Unknown(String),
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: JsonValue,
}

impl RelayMessage {
    /// Decode the string posted by the frame.
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        Ok(Self::from_envelope(envelope))
    }

    /// Decode a message that arrived as an already-structured value.
    pub fn from_value(value: JsonValue) -> Result<Self, RelayError> {
        match value {
            JsonValue::String(raw) => Self::parse(&raw),
            JsonValue::Object(_) => Ok(Self::from_envelope(serde_json::from_value(value)?)),
            other => Err(RelayError::Unsupported(other.to_string())),
        }
    }

    fn from_envelope(envelope: Envelope) -> Self {
        match envelope.event.as_str() {
            "onComplete" => Self::Complete(envelope.data),
            "onClose" => Self::Close(envelope.data),
            "onLoadStart" => Self::LoadStart,
            "onLoadComplete" => Self::LoadComplete,
            "onLoadError" => Self::LoadError(envelope.data),
            _ => Self::Unknown(envelope.event),
        }
    }

    /// The wire tag this message was decoded from.
    pub fn event_name(&self) -> &str {
        match self {
            Self::Complete(_) => "onComplete",
            Self::Close(_) => "onClose",
            Self::LoadStart => "onLoadStart",
            Self::LoadComplete => "onLoadComplete",
            Self::LoadError(_) => "onLoadError",
            Self::Unknown(tag) => tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_known_events() {
        assert_eq!(
            RelayMessage::parse(r#"{"event":"onComplete","data":{"amount":100}}"#).unwrap(),
            RelayMessage::Complete(json!({ "amount": 100 }))
        );
        assert_eq!(
            RelayMessage::parse(r#"{"event":"onClose","data":null}"#).unwrap(),
            RelayMessage::Close(JsonValue::Null)
        );
        assert_eq!(
            RelayMessage::parse(r#"{"event":"onLoadStart"}"#).unwrap(),
            RelayMessage::LoadStart
        );
    }

    #[test]
    fn missing_data_is_null() {
        assert_eq!(
            RelayMessage::parse(r#"{"event":"onClose"}"#).unwrap(),
            RelayMessage::Close(JsonValue::Null)
        );
    }

    #[test]
    fn unknown_tags_are_kept_not_rejected() {
        let msg = RelayMessage::parse(r#"{"event":"onPaymentMethodSelected","data":{}}"#).unwrap();
        assert_eq!(msg, RelayMessage::Unknown("onPaymentMethodSelected".into()));
        assert_eq!(msg.event_name(), "onPaymentMethodSelected");
    }

    #[test]
    fn malformed_payloads_are_errors() {
        assert!(matches!(
            RelayMessage::parse("not json"),
            Err(RelayError::Malformed(_))
        ));
        assert!(matches!(
            RelayMessage::parse(r#"{"data":1}"#),
            Err(RelayError::Malformed(_))
        ));
        assert!(matches!(
            RelayMessage::from_value(json!(42)),
            Err(RelayError::Unsupported(_))
        ));
    }

    #[test]
    fn structured_and_string_values_decode_alike() {
        let raw = r#"{"event":"onLoadComplete"}"#;
        assert_eq!(
            RelayMessage::from_value(json!(raw)).unwrap(),
            RelayMessage::from_value(json!({ "event": "onLoadComplete" })).unwrap()
        );
    }
}
