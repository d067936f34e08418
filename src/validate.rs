//! Request validation, run before anything is rendered.

use crate::error::ValidationError;
use crate::types::CheckoutRequest;

/// Check a request against the checkout rules, stopping at the first failure.
///
/// Rules are checked in a fixed order: amount, customer name, customer email,
/// payment description, contract code, then the `on_close`, `on_success` and
/// `on_error` callbacks.
pub fn validate_request(request: &CheckoutRequest) -> Result<(), ValidationError> {
    let params = &request.checkout_params;

    // NaN and infinities are not usable amounts either.
    if !params.amount.is_finite() || params.amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    if params.customer_full_name.is_empty() {
        return Err(ValidationError::MissingCustomerFullName);
    }
    if params.customer_email.is_empty() {
        return Err(ValidationError::MissingCustomerEmail);
    }
    if params.payment_description.as_deref().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingPaymentDescription);
    }
    if params.contract_code.is_empty() {
        return Err(ValidationError::MissingContractCode);
    }
    if request.on_close.is_none() {
        return Err(ValidationError::MissingOnClose);
    }
    if request.on_success.is_none() {
        return Err(ValidationError::MissingOnSuccess);
    }
    if request.on_error.is_none() {
        return Err(ValidationError::MissingOnError);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckoutParams;
    use yew::Callback;

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest::new(
            CheckoutParams::new(100.0, "John", "johndoe@example.com", "5867418298")
                .with_currency("NGN")
                .with_payment_description("Need"),
        )
        .on_close(Callback::noop())
        .on_success(Callback::noop())
        .on_error(Callback::noop())
    }

    #[test]
    fn accepts_complete_request() {
        assert_eq!(validate_request(&valid_request()), Ok(()));
    }

    #[test]
    fn rejects_non_positive_and_non_numeric_amounts() {
        for amount in [0.0, -1.0, -0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut request = valid_request();
            request.checkout_params.amount = amount;
            assert_eq!(
                validate_request(&request),
                Err(ValidationError::InvalidAmount),
                "amount {amount}"
            );
        }
    }

    #[test]
    fn amount_error_wins_over_every_other_rule() {
        let request = CheckoutRequest::new(CheckoutParams::default());
        assert_eq!(validate_request(&request), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn reports_exactly_the_missing_field() {
        let cases: [(fn(&mut CheckoutRequest), ValidationError); 8] = [
            (
                |r: &mut CheckoutRequest| r.checkout_params.customer_full_name.clear(),
                ValidationError::MissingCustomerFullName,
            ),
            (
                |r: &mut CheckoutRequest| r.checkout_params.customer_email.clear(),
                ValidationError::MissingCustomerEmail,
            ),
            (
                |r: &mut CheckoutRequest| r.checkout_params.payment_description = None,
                ValidationError::MissingPaymentDescription,
            ),
            (
                |r: &mut CheckoutRequest| r.checkout_params.payment_description = Some(String::new()),
                ValidationError::MissingPaymentDescription,
            ),
            (
                |r: &mut CheckoutRequest| r.checkout_params.contract_code.clear(),
                ValidationError::MissingContractCode,
            ),
            (|r: &mut CheckoutRequest| r.on_close = None, ValidationError::MissingOnClose),
            (|r: &mut CheckoutRequest| r.on_success = None, ValidationError::MissingOnSuccess),
            (|r: &mut CheckoutRequest| r.on_error = None, ValidationError::MissingOnError),
        ];

        for (strip, expected) in cases {
            let mut request = valid_request();
            strip(&mut request);
            assert_eq!(validate_request(&request), Err(expected));
        }
    }

    #[test]
    fn earlier_rule_is_reported_first() {
        let mut request = valid_request();
        request.checkout_params.customer_email.clear();
        request.on_error = None;
        assert_eq!(
            validate_request(&request),
            Err(ValidationError::MissingCustomerEmail)
        );
    }
}
