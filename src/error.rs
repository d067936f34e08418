//! Error types for the checkout surface.
//!
//! Validation problems are caller-data issues and end up in an error toast.
//! `CheckoutError::OutsideProvider` is a wiring mistake and is meant to fail fast.

use thiserror::Error;

/// The first checkout rule a request violates.
///
/// The `Display` text is shown to end users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount must be a valid number greater than 0")]
    InvalidAmount,

    #[error("Customer full name is required")]
    MissingCustomerFullName,

    #[error("Customer email is required")]
    MissingCustomerEmail,

    #[error("Payment description is required")]
    MissingPaymentDescription,

    #[error("Contract code is required")]
    MissingContractCode,

    #[error("onClose is required")]
    MissingOnClose,

    #[error("onSuccess is required")]
    MissingOnSuccess,

    #[error("onError is required")]
    MissingOnError,
}

/// Why [`CheckoutSession::open`](crate::CheckoutSession::open) refused a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    /// The request failed validation; nothing was presented.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Another checkout is still on screen.
    #[error("A checkout is already in progress")]
    AlreadyPresenting,
}

/// A message from the checkout frame that could not be understood.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Payload was not JSON, or had no `event` tag.
    #[error("Malformed relay message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload was neither a string nor a plain object.
    #[error("Unsupported relay payload: {0}")]
    Unsupported(String),
}

/// Errors raised by the provider surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The checkout capability was requested outside `MonnifyCheckoutProvider`.
    #[error("use_monnify_checkout must be used within a MonnifyCheckoutProvider")]
    OutsideProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Amount must be a valid number greater than 0"
        );
        assert_eq!(ValidationError::MissingOnError.to_string(), "onError is required");
    }

    #[test]
    fn open_error_forwards_validation_text() {
        let err: OpenError = ValidationError::MissingContractCode.into();
        assert_eq!(err.to_string(), "Contract code is required");
    }
}
