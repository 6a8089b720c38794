//! IPS QR payload text generation and parsing.
//!
//! A payload is a sequence of `TAG:value` pairs joined by `|`, in a fixed
//! tag order, e.g.
//!
//! ```text
//! K:PR|V:01|C:1|R:160500000000000562|N:JP EPS Beograd|I:RSD3596,13|SF:189|S:Uplata po računu|RO:972012345
//! ```
//!
//! # Example
//!
//! ```
//! use ips_qr::core::*;
//! use ips_qr::payload;
//! use rust_decimal_macros::dec;
//!
//! let payment = IpsPaymentBuilder::new(PaymentKind::PrintedBill, "160500000000000562", "EPS", "189")
//!     .amount(dec!(100))
//!     .build()
//!     .unwrap();
//! let text = payload::render_payload(&payment).unwrap();
//! assert_eq!(text, "K:PR|V:01|C:1|R:160500000000000562|N:EPS|I:RSD100,00|SF:189");
//! assert_eq!(payload::parse_payload(&text).unwrap(), payment);
//! ```

mod parse;
mod render;

pub use parse::parse_payload;
pub use render::render_payload;

/// Separator between `TAG:value` pairs.
pub const FIELD_SEPARATOR: char = '|';

/// Separator between a tag and its value.
pub const TAG_SEPARATOR: char = ':';

/// All IPS tags in the order they must appear.
pub(crate) const TAG_ORDER: &[&str] = &[
    "K", "V", "C", "R", "N", "I", "P", "SF", "S", "M", "JS", "RO", "RL",
];

/// Tags every payload must carry.
pub(crate) const MANDATORY_TAGS: &[&str] = &["K", "V", "C", "R", "N", "SF"];
