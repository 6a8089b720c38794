//! National Bank of Serbia IPS QR API: remote validation and rendering.
//!
//! The crate never draws images itself; `generate` relays payload text to
//! NBS and returns whatever bytes the service produced.
//!
//! # Example
//!
//! ```ignore
//! use ips_qr::nbs::*;
//!
//! let client = NbsClient::new(NbsConfig::from_env()?)?;
//!
//! // Validation (async, requires network)
//! let result = client.validate("K:PR|V:01|C:1|R:160500000000000562|N:EPS|SF:189").await?;
//! assert!(result.valid);
//!
//! // Rendering, 400x400 PNG
//! let png = client.generate_for_payment(&payment, Some(400)).await?;
//! ```

mod client;
mod config;

pub use client::{DEFAULT_IMAGE_SIZE, NbsClient, NbsError, NbsValidation};
pub use config::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_TIMEOUT_SECS, NbsConfig};
