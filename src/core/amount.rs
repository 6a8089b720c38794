//! Payment amount (IPS tag `I`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::IpsError;

/// The only currency IPS accepts.
pub const CURRENCY_RSD: &str = "RSD";

/// Largest amount an `I` tag can carry (12 integer digits, 2 decimals).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// A monetary amount with its ISO 4217 currency code.
///
/// Rendered as `RSD1234,50`: currency, integer part, comma, two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: Decimal,
}

impl Amount {
    /// An amount in Serbian dinars.
    pub fn rsd(value: Decimal) -> Self {
        Self {
            currency: CURRENCY_RSD.to_string(),
            value,
        }
    }

    /// Amount rounded half-up to two decimals.
    pub fn rounded(&self) -> Decimal {
        self.value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = format!("{:.2}", self.rounded()).replace('.', ",");
        write!(f, "{}{}", self.currency, value)
    }
}

impl FromStr for Amount {
    type Err = IpsError;

    /// Parse `RSD1234,56`, `RSD1234,5`, `RSD1234,` or `RSD1234`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(3) {
            return Err(IpsError::Amount(format!("'{s}' is too short")));
        }
        let (currency, number) = s.split_at(3);
        if !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(IpsError::Amount(format!(
                "'{currency}' is not a currency code"
            )));
        }

        let (int_part, frac_part) = number.split_once(',').unwrap_or((number, ""));
        if int_part.is_empty()
            || frac_part.len() > 2
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(IpsError::Amount(format!("'{number}' is not a valid amount")));
        }

        let value = Decimal::from_str(&format!("{int_part}.{frac_part:0<2}"))
            .map_err(|e| IpsError::Amount(e.to_string()))?;
        Ok(Self {
            currency: currency.to_string(),
            value,
        })
    }
}
