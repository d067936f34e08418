//! Provider configuration.
//!
//! Only `api_key` is mandatory. Everything else has a default matching the
//! public Monnify Web SDK, so a config can be built in code or loaded from JSON:
//!
//! ```rust
//! use yew_monnify::CheckoutConfig;
//!
//! let config: CheckoutConfig =
//!     serde_json::from_str(r#"{ "apiKey": "MK_TEST_GC3B8XG2XX", "pollIntervalMs": 250 }"#).unwrap();
//! assert_eq!(config.poll_interval_ms, 250);
//! assert_eq!(config.max_poll_attempts, Some(120));
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_SDK_URL: &str = "https://sdk.monnify.com/plugin/monnify.js";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 500;
/// One minute at the default interval.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

const TEST_KEY_PREFIX: &str = "MK_TEST_";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Merchant API key (`MK_PROD_…` or `MK_TEST_…`).
    pub api_key: String,

    /// Location of the Monnify Web SDK loaded inside the checkout frame.
    #[serde(default = "default_sdk_url")]
    pub sdk_url: String,

    /// Delay between checks for `MonnifySDK` inside the frame.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,

    /// Checks before the frame gives up and reports `onLoadError`.
    /// `None` polls forever.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: Option<u32>,

    /// `<title>` of the generated document.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_sdk_url() -> String {
    DEFAULT_SDK_URL.to_string()
}

fn default_poll_interval_ms() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_max_poll_attempts() -> Option<u32> {
    Some(DEFAULT_MAX_POLL_ATTEMPTS)
}

fn default_title() -> String {
    "Monnify".to_string()
}

impl CheckoutConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            sdk_url: default_sdk_url(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            title: default_title(),
        }
    }

    pub fn with_sdk_url(mut self, url: impl Into<String>) -> Self {
        self.sdk_url = url.into();
        self
    }

    pub fn with_poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn with_max_poll_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether the key targets the Monnify sandbox.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with(TEST_KEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sdk() {
        let config = CheckoutConfig::new("MK_PROD_ABC");
        assert_eq!(config.sdk_url, DEFAULT_SDK_URL);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.max_poll_attempts, Some(120));
        assert!(!config.is_test_mode());
    }

    #[test]
    fn explicit_null_disables_poll_limit() {
        let config: CheckoutConfig =
            serde_json::from_str(r#"{ "apiKey": "MK_TEST_1", "maxPollAttempts": null }"#).unwrap();
        assert_eq!(config.max_poll_attempts, None);
        assert!(config.is_test_mode());
    }
}
