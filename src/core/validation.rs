use rust_decimal::Decimal;

use super::account::is_valid_account;
use super::amount::{CURRENCY_RSD, MAX_AMOUNT};
use super::error::ValidationError;
use super::payment_codes::is_valid_payment_code;
use super::reference::{MAX_REFERENCE_LEN, validate_reference};
use super::types::*;

/// Message reported when the receiver account fails the mod-97 check.
pub const ACCOUNT_CHECK_FAILED: &str = "receiver account number failed check-digit validation";

const MAX_NAME_LEN: usize = 70;
const MAX_NAME_LINES: usize = 3;
const MAX_PURPOSE_LEN: usize = 35;
const MAX_PAYER_REFERENCE_LEN: usize = 140;

/// Validate a payment against the IPS QR rules.
/// Returns all validation errors found (not just the first).
pub fn validate_payment(payment: &IpsPayment) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // R: 18 digits with matching check digits
    if payment.receiver_account.len() != 18
        || !payment.receiver_account.bytes().all(|b| b.is_ascii_digit())
    {
        errors.push(ValidationError::with_tag(
            "receiver_account",
            "receiver account must be 18 digits without separators",
            "R",
        ));
    } else if !is_valid_account(&payment.receiver_account) {
        errors.push(ValidationError::with_tag(
            "receiver_account",
            ACCOUNT_CHECK_FAILED,
            "R",
        ));
    }

    // N: mandatory name, up to 70 chars over at most 3 lines
    if payment.receiver_name.trim().is_empty() {
        errors.push(ValidationError::with_tag(
            "receiver_name",
            "receiver name must not be empty",
            "N",
        ));
    } else {
        validate_text_block(&payment.receiver_name, "receiver_name", "N", &mut errors);
    }

    // I: RSD, positive, at most 999 999 999 999,99
    match &payment.amount {
        Some(amount) => {
            if amount.currency != CURRENCY_RSD {
                errors.push(ValidationError::with_tag(
                    "amount.currency",
                    format!(
                        "currency '{}' is not supported, IPS accepts only {CURRENCY_RSD}",
                        amount.currency
                    ),
                    "I",
                ));
            }
            let value = amount.value;
            if value.normalize().scale() > 2 {
                errors.push(ValidationError::with_tag(
                    "amount",
                    "amount must not have more than two decimal places",
                    "I",
                ));
            }
            if value <= Decimal::ZERO {
                errors.push(ValidationError::with_tag(
                    "amount",
                    "amount must be greater than zero",
                    "I",
                ));
            } else if value > MAX_AMOUNT {
                errors.push(ValidationError::with_tag(
                    "amount",
                    format!("amount must not exceed {MAX_AMOUNT}"),
                    "I",
                ));
            }
        }
        None if payment.kind.is_merchant() => {
            errors.push(ValidationError::with_tag(
                "amount",
                format!("amount is required for {} codes", payment.kind.code()),
                "I",
            ));
        }
        None => {}
    }

    // P
    if let Some(payer) = &payment.payer {
        validate_text_block(payer, "payer", "P", &mut errors);
    }

    // SF
    if !is_valid_payment_code(&payment.payment_code) {
        errors.push(ValidationError::with_tag(
            "payment_code",
            format!(
                "payment code '{}' must be 3 digits starting with 1 or 2",
                payment.payment_code
            ),
            "SF",
        ));
    }

    // S
    if let Some(purpose) = &payment.purpose {
        if purpose.chars().count() > MAX_PURPOSE_LEN {
            errors.push(ValidationError::with_tag(
                "purpose",
                format!("purpose must not exceed {MAX_PURPOSE_LEN} characters"),
                "S",
            ));
        }
        check_single_line(purpose, "purpose", "S", &mut errors);
    }

    // M: required for merchant codes
    match &payment.merchant_category {
        Some(mcc) if mcc.len() != 4 || !mcc.bytes().all(|b| b.is_ascii_digit()) => {
            errors.push(ValidationError::with_tag(
                "merchant_category",
                format!("merchant category '{mcc}' must be 4 digits"),
                "M",
            ));
        }
        None if payment.kind.is_merchant() => {
            errors.push(ValidationError::with_tag(
                "merchant_category",
                format!(
                    "merchant category is required for {} codes",
                    payment.kind.code()
                ),
                "M",
            ));
        }
        _ => {}
    }

    // JS
    if let Some(code) = &payment.one_time_code {
        if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(ValidationError::with_tag(
                "one_time_code",
                "one-time code must be 5 digits",
                "JS",
            ));
        }
    }

    // RO
    if let Some(reference) = &payment.reference {
        let rendered = reference.to_string();
        if rendered.chars().count() > MAX_REFERENCE_LEN {
            errors.push(ValidationError::with_tag(
                "reference",
                format!("reference must not exceed {MAX_REFERENCE_LEN} characters"),
                "RO",
            ));
        } else if !validate_reference(&reference.model, &reference.number) {
            errors.push(ValidationError::with_tag(
                "reference",
                format!(
                    "reference '{rendered}' is not valid for model {}",
                    reference.model
                ),
                "RO",
            ));
        }
    }

    // RL
    if let Some(payer_ref) = &payment.payer_reference {
        if payer_ref.chars().count() > MAX_PAYER_REFERENCE_LEN {
            errors.push(ValidationError::with_tag(
                "payer_reference",
                format!("payer reference must not exceed {MAX_PAYER_REFERENCE_LEN} characters"),
                "RL",
            ));
        }
        check_single_line(payer_ref, "payer_reference", "RL", &mut errors);
    }

    errors
}

/// Name/address blocks (N, P): length, line count, no `|`.
fn validate_text_block(value: &str, field: &str, tag: &str, errors: &mut Vec<ValidationError>) {
    if value.chars().count() > MAX_NAME_LEN {
        errors.push(ValidationError::with_tag(
            field,
            format!("must not exceed {MAX_NAME_LEN} characters"),
            tag,
        ));
    }
    if value.lines().count() > MAX_NAME_LINES {
        errors.push(ValidationError::with_tag(
            field,
            format!("must not have more than {MAX_NAME_LINES} lines"),
            tag,
        ));
    }
    check_separator(value, field, tag, errors);
}

/// Single-line values (S, RL): no line breaks, no `|`.
fn check_single_line(value: &str, field: &str, tag: &str, errors: &mut Vec<ValidationError>) {
    if value.contains(['\r', '\n']) {
        errors.push(ValidationError::with_tag(
            field,
            "must not contain line breaks",
            tag,
        ));
    }
    check_separator(value, field, tag, errors);
}

fn check_separator(value: &str, field: &str, tag: &str, errors: &mut Vec<ValidationError>) {
    if value.contains('|') {
        errors.push(ValidationError::with_tag(
            field,
            "must not contain the '|' separator",
            tag,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Amount, PaymentReference};
    use rust_decimal_macros::dec;

    fn payment() -> IpsPayment {
        IpsPayment {
            kind: PaymentKind::PrintedBill,
            receiver_account: "160500000000000562".into(),
            receiver_name: "JP EPS Beograd\r\nBalkanska 13".into(),
            amount: Some(Amount::rsd(dec!(3596.13))),
            payer: None,
            payment_code: "189".into(),
            purpose: Some("Uplata po računu".into()),
            merchant_category: None,
            one_time_code: None,
            reference: Some(PaymentReference::new("97", "2012345")),
            payer_reference: None,
        }
    }

    fn tags(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().filter_map(|e| e.tag.as_deref()).collect()
    }

    #[test]
    fn valid_payment_has_no_errors() {
        assert!(validate_payment(&payment()).is_empty());
    }

    #[test]
    fn bad_check_digits_reported_with_message() {
        let mut p = payment();
        p.receiver_account = "160500000000000563".into();
        let errors = validate_payment(&p);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, ACCOUNT_CHECK_FAILED);
        assert_eq!(errors[0].tag.as_deref(), Some("R"));
    }

    #[test]
    fn formatted_account_rejected() {
        let mut p = payment();
        p.receiver_account = "160-5000000000005-62".into();
        assert_eq!(tags(&validate_payment(&p)), vec!["R"]);
    }

    #[test]
    fn collects_all_errors() {
        let mut p = payment();
        p.receiver_name = " ".into();
        p.payment_code = "389".into();
        p.purpose = Some("x".repeat(36));
        assert_eq!(tags(&validate_payment(&p)), vec!["N", "SF", "S"]);
    }

    #[test]
    fn name_limits() {
        let mut p = payment();
        p.receiver_name = "a\nb\nc\nd".into();
        assert_eq!(tags(&validate_payment(&p)), vec!["N"]);
        p.receiver_name = "ž".repeat(70);
        assert!(validate_payment(&p).is_empty());
        p.receiver_name = "ž".repeat(71);
        assert_eq!(tags(&validate_payment(&p)), vec!["N"]);
    }

    #[test]
    fn separator_in_value_rejected() {
        let mut p = payment();
        p.payer = Some("Pera | Perić".into());
        assert_eq!(tags(&validate_payment(&p)), vec!["P"]);
    }

    #[test]
    fn amount_rules() {
        let mut p = payment();
        p.amount = Some(Amount::rsd(dec!(0)));
        assert_eq!(tags(&validate_payment(&p)), vec!["I"]);
        p.amount = Some(Amount::rsd(dec!(1000000000000)));
        assert_eq!(tags(&validate_payment(&p)), vec!["I"]);
        p.amount = Some(Amount {
            currency: "EUR".into(),
            value: dec!(10),
        });
        assert_eq!(tags(&validate_payment(&p)), vec!["I"]);
        p.amount = None;
        assert!(validate_payment(&p).is_empty());
    }

    #[test]
    fn amount_limited_to_two_decimals() {
        let mut p = payment();
        p.amount = Some(Amount::rsd(dec!(10.005)));
        assert_eq!(tags(&validate_payment(&p)), vec!["I"]);
        p.amount = Some(Amount::rsd(dec!(10.500)));
        assert!(validate_payment(&p).is_empty());
    }

    #[test]
    fn single_line_fields() {
        let mut p = payment();
        p.purpose = Some("Uplata\nracuna".into());
        p.payer_reference = Some("INV-7\r\n".into());
        assert_eq!(tags(&validate_payment(&p)), vec!["S", "RL"]);
        p.purpose = Some("Uplata ".into());
        p.payer_reference = Some("INV-7 ".into());
        assert!(validate_payment(&p).is_empty());
    }

    #[test]
    fn merchant_codes_need_mcc_and_amount() {
        let mut p = payment();
        p.kind = PaymentKind::MerchantPresented;
        p.amount = None;
        assert_eq!(tags(&validate_payment(&p)), vec!["I", "M"]);
        p.amount = Some(Amount::rsd(dec!(250)));
        p.merchant_category = Some("5411".into());
        assert!(validate_payment(&p).is_empty());
        p.merchant_category = Some("541".into());
        assert_eq!(tags(&validate_payment(&p)), vec!["M"]);
    }

    #[test]
    fn one_time_code() {
        let mut p = payment();
        p.one_time_code = Some("12345".into());
        assert!(validate_payment(&p).is_empty());
        p.one_time_code = Some("1234".into());
        assert_eq!(tags(&validate_payment(&p)), vec!["JS"]);
    }

    #[test]
    fn reference_checked_by_model() {
        let mut p = payment();
        p.reference = Some(PaymentReference::new("97", "2112345"));
        assert_eq!(tags(&validate_payment(&p)), vec!["RO"]);
        p.reference = Some(PaymentReference::new("00", "1".repeat(34)));
        assert_eq!(tags(&validate_payment(&p)), vec!["RO"]);
        p.reference = Some(PaymentReference::new("00", "1".repeat(33)));
        assert!(validate_payment(&p).is_empty());
    }
}
