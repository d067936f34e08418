//! Checkout session state machine.
//!
//! `CheckoutSession` holds at most one request. It goes idle → presenting on a
//! successful [`open`](CheckoutSession::open) and back to idle on the first
//! terminal event: an `onComplete` or `onClose` relay message, an
//! `onLoadError` report, or an explicit dismiss. The request is moved out
//! before its callback fires, so each session resolves exactly once and
//! anything arriving afterwards is ignored.
//!
//! Nothing here touches the DOM; the provider component drives it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::config::CheckoutConfig;
use crate::document::{placeholder_document, render_document};
use crate::error::OpenError;
use crate::relay::RelayMessage;
use crate::types::{CheckoutFailure, CheckoutRequest, CheckoutResponse, CloseEvent};
use crate::validate::validate_request;

const LOAD_ERROR_FALLBACK: &str = "Checkout failed to load";

/// How a session ended. Mirrors the callback that was invoked.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    Completed(CheckoutResponse),
    Closed(Option<CloseEvent>),
    Failed(CheckoutFailure),
}

#[derive(Debug, Default)]
pub struct CheckoutSession {
    current: Option<CheckoutRequest>,
    modal_visible: bool,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store `request`, making the checkout visible.
    ///
    /// On error the session is left exactly as it was.
    pub fn open(&mut self, request: CheckoutRequest) -> Result<(), OpenError> {
        if self.current.is_some() {
            log::warn!("checkout open rejected: a session is already presenting");
            return Err(OpenError::AlreadyPresenting);
        }
        validate_request(&request)?;

        log::info!(
            "opening checkout for contract {} ({})",
            request.checkout_params.contract_code,
            request.checkout_params.amount
        );
        self.current = Some(request);
        self.modal_visible = true;
        Ok(())
    }

    pub fn is_presenting(&self) -> bool {
        self.current.is_some()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn current(&self) -> Option<&CheckoutRequest> {
        self.current.as_ref()
    }

    /// Document for the stored request, or an inert placeholder when idle.
    pub fn document(&self, config: &CheckoutConfig) -> String {
        match &self.current {
            Some(request) => render_document(&request.checkout_params, config),
            None => {
                log::debug!("no checkout request stored, rendering placeholder");
                placeholder_document().to_string()
            }
        }
    }

    /// Act on a message from the checkout frame.
    ///
    /// Returns a [`Resolution`] when the message ended the session.
    pub fn relay(&mut self, message: RelayMessage) -> Option<Resolution> {
        match message {
            RelayMessage::Complete(data) => {
                self.finish(CheckoutOutcome::Completed(decode_or_extra(data)))
            }
            RelayMessage::Close(JsonValue::Null) => self.finish(CheckoutOutcome::Closed(None)),
            RelayMessage::Close(data) => {
                self.finish(CheckoutOutcome::Closed(Some(decode_or_extra(data))))
            }
            RelayMessage::LoadError(data) => {
                let message = data
                    .get("message")
                    .and_then(JsonValue::as_str)
                    .unwrap_or(LOAD_ERROR_FALLBACK)
                    .to_string();
                log::error!("checkout frame failed to load: {message}");
                self.finish(CheckoutOutcome::Failed(CheckoutFailure {
                    message,
                    data: Some(data),
                }))
            }
            RelayMessage::LoadStart => {
                log::debug!("checkout frame started loading");
                None
            }
            RelayMessage::LoadComplete => {
                log::debug!("checkout frame finished loading");
                None
            }
            RelayMessage::Unknown(tag) => {
                log::debug!("ignoring checkout event {tag}");
                None
            }
        }
    }

    /// User closed the checkout without the SDK reporting anything.
    pub fn dismiss(&mut self) -> Option<Resolution> {
        self.finish(CheckoutOutcome::Closed(None))
    }

    fn finish(&mut self, outcome: CheckoutOutcome) -> Option<Resolution> {
        let Some(request) = self.current.take() else {
            log::debug!("checkout already resolved, dropping {outcome:?}");
            return None;
        };
        self.modal_visible = false;
        Some(Resolution { request, outcome })
    }
}

/// A session that has just ended, holding the request whose callback is due.
///
/// Returned after the session state is cleared so the callback can run
/// without any borrow of the session outstanding.
#[derive(Debug)]
#[must_use = "the caller's callback only fires from `notify`"]
pub struct Resolution {
    request: CheckoutRequest,
    outcome: CheckoutOutcome,
}

impl Resolution {
    pub fn outcome(&self) -> &CheckoutOutcome {
        &self.outcome
    }

    /// Invoke the callback matching the outcome.
    pub fn notify(self) -> CheckoutOutcome {
        let Self { request, outcome } = self;
        match &outcome {
            CheckoutOutcome::Completed(response) => {
                log::info!("checkout completed: {}", response.transaction_reference);
                if let Some(cb) = &request.on_success {
                    cb.emit(response.clone());
                }
            }
            CheckoutOutcome::Closed(event) => {
                log::info!("checkout closed");
                if let Some(cb) = &request.on_close {
                    cb.emit(event.clone());
                }
            }
            CheckoutOutcome::Failed(failure) => {
                if let Some(cb) = &request.on_error {
                    cb.emit(failure.clone());
                }
            }
        }
        outcome
    }
}

/// Payload types that keep unrecognised fields in an `extra` map.
trait WithExtra: DeserializeOwned + Default {
    fn extra_mut(&mut self) -> &mut Map<String, JsonValue>;
}

impl WithExtra for CheckoutResponse {
    fn extra_mut(&mut self) -> &mut Map<String, JsonValue> {
        &mut self.extra
    }
}

impl WithExtra for CloseEvent {
    fn extra_mut(&mut self) -> &mut Map<String, JsonValue> {
        &mut self.extra
    }
}

/// Decode an SDK payload, falling back to raw data in `extra` so nothing is lost.
fn decode_or_extra<T: WithExtra>(data: JsonValue) -> T {
    match serde_json::from_value::<T>(data.clone()) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::warn!("unexpected checkout payload shape: {err}");
            let mut fallback = T::default();
            match data {
                JsonValue::Object(map) => *fallback.extra_mut() = map,
                other => {
                    fallback.extra_mut().insert("data".to_string(), other);
                }
            }
            fallback
        }
    }
}
