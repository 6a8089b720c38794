use thiserror::Error;

/// Errors that can occur while building, rendering or parsing an IPS payment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IpsError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing input.
    #[error("builder error: {0}")]
    Builder(String),

    /// Malformed IPS QR payload text.
    #[error("payload error: {0}")]
    Payload(String),

    /// Amount could not be parsed or is out of range.
    #[error("amount error: {0}")]
    Amount(String),
}

/// Why a string could not be turned into an [`AccountNumber`](super::AccountNumber).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The digit-only projection does not have 18 digits.
    #[error("account number must have 18 digits, found {found}")]
    Length { found: usize },

    /// The trailing check digits do not match the account body.
    #[error("check digits {found:02} do not match, expected {expected:02}")]
    CheckDigits { expected: u8, found: u8 },
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field of [`IpsPayment`](super::IpsPayment) that failed (e.g. "receiver_account").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// IPS tag of the field if applicable (e.g. "R").
    pub tag: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "[{}] {}: {}", tag, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a tag.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            tag: None,
        }
    }

    /// Create a validation error bound to an IPS tag.
    pub fn with_tag(
        field: impl Into<String>,
        message: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            tag: Some(tag.into()),
        }
    }
}
