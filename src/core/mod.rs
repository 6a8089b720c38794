//! Core IPS types: account check digits, payment model, validation.
//!
//! Everything in this module is pure: no I/O, no shared state, safe to
//! call from any number of threads.

mod account;
mod amount;
mod builder;
mod error;
pub mod payment_codes;
mod reference;
mod types;
mod validation;

pub use account::*;
pub use amount::*;
pub use builder::*;
pub use error::*;
pub use payment_codes::{PaymentForm, is_valid_payment_code};
pub use reference::*;
pub use types::*;
pub use validation::*;
