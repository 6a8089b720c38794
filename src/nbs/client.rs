//! NBS IPS QR REST API client: payload validation and code rendering.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::NbsConfig;
use crate::core::{IpsPayment, ValidationError, validate_payment};
use crate::payload::render_payload;

/// Default rendered image size in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 300;

const MIN_IMAGE_SIZE: u32 = 100;
const MAX_IMAGE_SIZE: u32 = 1000;

/// Result of an NBS payload validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NbsValidation {
    /// Whether NBS accepted the payload (status code 0).
    pub valid: bool,
    /// NBS status code.
    pub code: i32,
    /// NBS status description.
    pub description: String,
    /// Individual problems reported by NBS.
    pub errors: Vec<String>,
    /// Tag values as NBS understood them.
    pub fields: BTreeMap<String, String>,
}

/// Error from the NBS client.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum NbsError {
    /// Local validation failed; no request was sent.
    Invalid(Vec<ValidationError>),
    /// Network or HTTP error.
    Network(String),
    /// NBS answered with a non-success HTTP status.
    Api(String),
    /// Failed to parse the response.
    Parse(String),
    /// Invalid client configuration.
    Config(String),
}

impl fmt::Display for NbsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => {
                let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "payment is invalid: {}", msgs.join("; "))
            }
            Self::Network(e) => write!(f, "NBS network error: {e}"),
            Self::Api(e) => write!(f, "NBS API error: {e}"),
            Self::Parse(e) => write!(f, "NBS parse error: {e}"),
            Self::Config(e) => write!(f, "NBS config error: {e}"),
        }
    }
}

impl std::error::Error for NbsError {}

/// NBS API response structure.
#[derive(Debug, Deserialize)]
struct NbsApiResponse {
    s: NbsStatus,
    #[serde(default)]
    n: Option<BTreeMap<String, String>>,
    #[serde(default)]
    e: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct NbsStatus {
    code: i32,
    #[serde(default)]
    desc: String,
}

impl From<NbsApiResponse> for NbsValidation {
    fn from(resp: NbsApiResponse) -> Self {
        Self {
            valid: resp.s.code == 0,
            code: resp.s.code,
            description: resp.s.desc,
            errors: resp.e.unwrap_or_default(),
            fields: resp.n.unwrap_or_default(),
        }
    }
}

/// Async client for the NBS IPS QR API.
///
/// Cloning is cheap; clones share one connection pool. Requests are
/// sent once, without retries.
#[derive(Debug, Clone)]
pub struct NbsClient {
    http: reqwest::Client,
    config: NbsConfig,
}

impl NbsClient {
    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NbsError::Config`] if the base URL is not http(s) or the
    /// HTTP client cannot be built.
    pub fn new(config: NbsConfig) -> Result<Self, NbsError> {
        if !(config.base_url.starts_with("https://") || config.base_url.starts_with("http://")) {
            return Err(NbsError::Config(format!(
                "base URL '{}' must start with http:// or https://",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NbsError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NbsConfig {
        &self.config
    }

    /// Validate payload text against the NBS API.
    ///
    /// An NBS rejection is a successful call with `valid == false`.
    ///
    /// # Errors
    ///
    /// Returns `NbsError::Network` on connection issues,
    /// `NbsError::Api` on non-success HTTP status,
    /// `NbsError::Parse` on unexpected response formats.
    pub async fn validate(&self, payload: &str) -> Result<NbsValidation, NbsError> {
        let url = self.config.endpoint("validate");
        tracing::debug!(%url, len = payload.len(), "validating IPS payload");

        let body = self.post_text(&url, payload).await?;
        let text = String::from_utf8(body).map_err(|e| NbsError::Parse(e.to_string()))?;
        let api_resp: NbsApiResponse =
            serde_json::from_str(&text).map_err(|e| NbsError::Parse(e.to_string()))?;

        let result = NbsValidation::from(api_resp);
        if !result.valid {
            tracing::debug!(
                code = result.code,
                description = %result.description,
                "NBS rejected payload"
            );
        }
        Ok(result)
    }

    /// Ask NBS to render payload text and return the image bytes.
    ///
    /// `size` defaults to [`DEFAULT_IMAGE_SIZE`] and is clamped to 100..=1000.
    pub async fn generate(&self, payload: &str, size: Option<u32>) -> Result<Vec<u8>, NbsError> {
        let size = size
            .unwrap_or(DEFAULT_IMAGE_SIZE)
            .clamp(MIN_IMAGE_SIZE, MAX_IMAGE_SIZE);
        let url = self.config.endpoint(&format!("gen/{size}"));
        tracing::debug!(%url, len = payload.len(), "requesting IPS code image");

        let image = self.post_text(&url, payload).await?;
        if image.is_empty() {
            return Err(NbsError::Parse("NBS returned an empty image".into()));
        }
        Ok(image)
    }

    /// Validate a payment locally, then against NBS.
    ///
    /// No request is sent if local validation fails.
    pub async fn validate_payment_remote(
        &self,
        payment: &IpsPayment,
    ) -> Result<NbsValidation, NbsError> {
        let payload = local_payload(payment)?;
        self.validate(&payload).await
    }

    /// Validate a payment locally, then have NBS render it.
    ///
    /// No request is sent if local validation fails.
    pub async fn generate_for_payment(
        &self,
        payment: &IpsPayment,
        size: Option<u32>,
    ) -> Result<Vec<u8>, NbsError> {
        let payload = local_payload(payment)?;
        self.generate(&payload, size).await
    }

    async fn post_text(&self, url: &str, payload: &str) -> Result<Vec<u8>, NbsError> {
        let resp = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "NBS request failed");
                NbsError::Network(e.to_string())
            })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| NbsError::Network(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            tracing::warn!(%url, %status, "NBS returned an error status");
            return Err(NbsError::Api(format!("HTTP {status}: {text}")));
        }
        Ok(body.to_vec())
    }
}

fn local_payload(payment: &IpsPayment) -> Result<String, NbsError> {
    let errors = validate_payment(payment);
    if !errors.is_empty() {
        return Err(NbsError::Invalid(errors));
    }
    render_payload(payment)
        .map_err(|e| NbsError::Invalid(vec![ValidationError::new("payment", e.to_string())]))
}
