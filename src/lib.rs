//! # ips-qr
//!
//! Serbian NBS "IPS QR" payment codes: the pipe-delimited `TAG:value`
//! payload that banking apps scan to pre-fill a payment.
//!
//! The heart of the crate is the account-number check: an 18-digit
//! Serbian account carries two check digits equal to
//! `98 - (first 16 digits mod 97)`. All monetary values use
//! [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use ips_qr::core::*;
//!
//! assert!(is_valid_account("160-5000000000005-62"));
//! assert!(!is_valid_account("160-5000000000005-63"));
//! assert_eq!(format_account("160500000000000562"), "160-5000000000005-62");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Account check digits, payment model, validation |
//! | `payload` | IPS QR payload text generation & parsing |
//! | `nbs` | NBS API client for remote validation and rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "payload")]
pub mod payload;

#[cfg(feature = "nbs")]
pub mod nbs;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
