//! Serbian domestic bank account numbers: mod-97 check digits and display format.
//!
//! A canonical account number is 18 digits: a 16-digit body (3-digit bank
//! code + 13-digit account) followed by 2 check digits equal to
//! `98 - (body mod 97)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::AccountError;

/// Number of digits in a canonical account number.
pub const ACCOUNT_DIGITS: usize = 18;

const BODY_DIGITS: usize = 16;

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `digits mod 97`, folded one digit at a time so no big integer is needed.
fn mod97(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |rem, b| (rem * 10 + u32::from(b - b'0')) % 97)
}

/// Numeric value of two ASCII check digits, so "05" is 5.
fn check_value(check: &str) -> u8 {
    check
        .bytes()
        .fold(0, |acc, b| acc * 10 + (b - b'0'))
}

fn expected_check(body: &str) -> u8 {
    // Range [2, 98]; never reduced modulo 100, so "99" can never match.
    (98 - mod97(body)) as u8
}

/// Check whether `raw` holds a valid 18-digit account number.
///
/// Every non-digit character is ignored, so `"160-5000000000005-62"` and
/// `"160 5000000000005 62"` validate the same as `"160500000000000562"`.
/// Malformed input is not an error, it is simply invalid.
pub fn is_valid_account(raw: &str) -> bool {
    let clean = digits_only(raw);
    if clean.len() != ACCOUNT_DIGITS {
        return false;
    }
    let (body, check) = clean.split_at(BODY_DIGITS);
    check_value(check) == expected_check(body)
}

/// Format an account number as `XXX-XXXXXXXXXXXXX-XX` for display.
///
/// Input whose digit-only projection is not 18 digits long is returned
/// unchanged. The check digits are not verified.
pub fn format_account(raw: &str) -> String {
    let clean = digits_only(raw);
    if clean.len() != ACCOUNT_DIGITS {
        return raw.to_string();
    }
    format!("{}-{}-{}", &clean[..3], &clean[3..16], &clean[16..])
}

/// Compute the check digits for a 16-digit account body.
///
/// Separators are ignored. Returns `None` if the body does not contain
/// exactly 16 digits.
pub fn compute_check_digits(account_part: &str) -> Option<u8> {
    let clean = digits_only(account_part);
    (clean.len() == BODY_DIGITS).then(|| expected_check(&clean))
}

/// A validated account number in canonical 18-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Parse and validate an account number, ignoring separators.
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let clean = digits_only(raw);
        if clean.len() != ACCOUNT_DIGITS {
            return Err(AccountError::Length { found: clean.len() });
        }
        let expected = expected_check(&clean[..BODY_DIGITS]);
        let found = check_value(&clean[BODY_DIGITS..]);
        if found != expected {
            return Err(AccountError::CheckDigits { expected, found });
        }
        Ok(Self(clean))
    }

    /// Build an account number from bank code and account identifier,
    /// zero-padding the identifier to 13 digits and appending check digits.
    ///
    /// Returns `None` if the bank code is not 3 digits or the identifier
    /// has more than 13 digits.
    pub fn from_parts(bank_code: &str, account: &str) -> Option<Self> {
        let bank = digits_only(bank_code);
        let account = digits_only(account);
        if bank.len() != 3 || account.is_empty() || account.len() > 13 {
            return None;
        }
        let body = format!("{bank}{account:0>13}");
        let check = expected_check(&body);
        Some(Self(format!("{body}{check:02}")))
    }

    /// The canonical 18 digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The 3-digit bank code.
    pub fn bank_code(&self) -> &str {
        &self.0[..3]
    }

    /// The 16-digit body the check digits are computed over.
    pub fn account_part(&self) -> &str {
        &self.0[..BODY_DIGITS]
    }

    /// The trailing two check digits as a number.
    pub fn check_digits(&self) -> u8 {
        expected_check(self.account_part())
    }

    /// Dashed display form, `XXX-XXXXXXXXXXXXX-XX`.
    pub fn formatted(&self) -> String {
        format_account(&self.0)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for AccountNumber {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for AccountNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
