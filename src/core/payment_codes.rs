//! Payment codes (šifra plaćanja, IPS tag `SF`).
//!
//! A payment code is three digits. The first digit is the payment form
//! (`1` cash, `2` cashless; IPS accepts no other), the last two digits
//! the purpose of the payment.

use serde::{Deserialize, Serialize};

/// Payment form encoded in the first digit of a payment code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentForm {
    /// `1`: cash.
    Cash,
    /// `2`: cashless.
    Cashless,
}

/// Check that `code` is a syntactically valid IPS payment code.
pub fn is_valid_payment_code(code: &str) -> bool {
    payment_form(code).is_some()
}

/// Payment form of `code`, or `None` if the code is not three digits
/// starting with `1` or `2`.
pub fn payment_form(code: &str) -> Option<PaymentForm> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match code.as_bytes()[0] {
        b'1' => Some(PaymentForm::Cash),
        b'2' => Some(PaymentForm::Cashless),
        _ => None,
    }
}

/// Describe the purpose of a payment code, if it is a commonly used one.
pub fn describe(code: &str) -> Option<&'static str> {
    payment_form(code)?;
    PURPOSES
        .binary_search_by_key(&&code[1..], |&(k, _)| k)
        .ok()
        .map(|i| PURPOSES[i].1)
}

/// Common payment purposes keyed by the last two digits (sorted for binary search).
static PURPOSES: &[(&str, &str)] = &[
    ("20", "Trade in goods and services, intermediate consumption"),
    ("21", "Trade in goods and services, final consumption"),
    ("22", "Public utility services"),
    ("23", "Investments in buildings and equipment"),
    ("24", "Investments, other"),
    ("25", "Rent of publicly owned property"),
    ("26", "Rent"),
    ("31", "Customs and other import duties"),
    ("40", "Cash withdrawal"),
    ("53", "Payment of public revenues"),
    ("60", "Insurance premiums and damage compensation"),
    ("89", "Transactions on behalf of citizens"),
];
