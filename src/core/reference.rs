//! Payment reference (poziv na broj, IPS tag `RO`).
//!
//! A reference is a two-digit model followed by the reference number.
//! Model `97` numbers start with two control digits computed with
//! ISO 7064 MOD 97-10 over the rest of the number, letters counting as
//! their base-36 value (A=10 … Z=35). Model `00` carries no check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of the rendered `RO` value (model + number).
pub const MAX_REFERENCE_LEN: usize = 35;

/// A payment reference: model plus number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReference {
    /// Two-digit model (e.g. "97", "00").
    pub model: String,
    /// Reference number without the model.
    pub number: String,
}

impl PaymentReference {
    pub fn new(model: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            number: number.into(),
        }
    }

    /// Split a rendered `RO` value into model and number.
    ///
    /// Returns `None` if the value is shorter than three characters or
    /// the first two characters are not digits.
    pub fn split(value: &str) -> Option<Self> {
        if value.len() < 3 || !value.is_char_boundary(2) {
            return None;
        }
        let (model, number) = value.split_at(2);
        model
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| Self::new(model, number))
    }

    /// Build a model 97 reference, prefixing `body` with its control digits.
    pub fn model_97(body: &str) -> Option<Self> {
        let check = compute_reference_check(body)?;
        Some(Self::new("97", format!("{check:02}{body}")))
    }

    /// Whether the reference passes the check required by its model.
    pub fn is_valid(&self) -> bool {
        validate_reference(&self.model, &self.number)
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.model, self.number)
    }
}

fn fold_mod97(chars: impl Iterator<Item = char>) -> Option<u32> {
    let mut rem = 0u32;
    for c in chars {
        let v = c.to_digit(36)?;
        // Letters contribute two decimal digits.
        rem = if v >= 10 {
            (rem * 100 + v) % 97
        } else {
            (rem * 10 + v) % 97
        };
    }
    Some(rem)
}

fn is_reference_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Control digits for a model 97 reference body (separators `-` ignored).
///
/// Returns `None` for an empty body or one with characters other than
/// digits, uppercase ASCII letters and `-`.
pub fn compute_reference_check(body: &str) -> Option<u8> {
    let chars: Vec<char> = body.chars().filter(|&c| c != '-').collect();
    if chars.is_empty() || !chars.iter().all(|&c| is_reference_char(c)) {
        return None;
    }
    let rem = fold_mod97(chars.into_iter())?;
    Some((98 - (rem * 100) % 97) as u8)
}

/// Validate a reference number against its model.
///
/// - `97`: two leading control digits must match the rest of the number.
/// - `00`: digits, uppercase letters and `-`, not empty.
/// - any other model is rejected.
pub fn validate_reference(model: &str, number: &str) -> bool {
    match model {
        "97" => {
            let bytes = number.as_bytes();
            if bytes.len() < 3 || !bytes[..2].iter().all(u8::is_ascii_digit) {
                return false;
            }
            let check = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
            compute_reference_check(&number[2..]) == Some(check)
        }
        "00" => !number.is_empty() && number.chars().all(|c| is_reference_char(c) || c == '-'),
        _ => false,
    }
}
