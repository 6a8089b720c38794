//! NBS client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::NbsError;

/// Default NBS IPS QR API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nbs.rs/QRcode/api/qr/v1";

/// Environment variable overriding [`NbsConfig::base_url`].
pub const ENV_BASE_URL: &str = "IPS_QR_NBS_URL";

/// Environment variable overriding [`NbsConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "IPS_QR_NBS_TIMEOUT_SECS";

/// Connection settings for [`NbsClient`](super::NbsClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NbsConfig {
    /// API base URL without trailing slash.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for NbsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("ips-qr/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl NbsConfig {
    /// Defaults with `IPS_QR_NBS_URL` / `IPS_QR_NBS_TIMEOUT_SECS` applied.
    ///
    /// # Errors
    ///
    /// Returns [`NbsError::Config`] if the timeout variable is not a positive number.
    pub fn from_env() -> Result<Self, NbsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NbsError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw
                .trim()
                .parse()
                .ok()
                .filter(|&secs: &u64| secs > 0)
                .ok_or_else(|| {
                    NbsError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive number of seconds, got '{raw}'"
                    ))
                })?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout, rounded up to whole seconds (at least one).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = secs.max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `base_url` joined with `path`, with exactly one `/` between them.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_is_https() {
        let c = NbsConfig::default();
        assert!(c.base_url.starts_with("https://"));
        assert_eq!(c.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_overrides() {
        let c = NbsConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:8080/qr/"),
            (ENV_TIMEOUT_SECS, " 5 "),
        ]))
        .unwrap();
        assert_eq!(c.base_url, "http://localhost:8080/qr/");
        assert_eq!(c.timeout_secs, 5);
        assert_eq!(c.endpoint("/validate"), "http://localhost:8080/qr/validate");
    }

    #[test]
    fn env_bad_timeout() {
        let err = NbsConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, NbsError::Config(_)));
    }

    #[test]
    fn env_zero_timeout_rejected() {
        let err = NbsConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, NbsError::Config(_)));
    }

    #[test]
    fn sub_second_timeout_rounds_up() {
        let c = NbsConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(c.timeout(), Duration::from_secs(1));
        let c = NbsConfig::default().with_timeout(Duration::from_millis(2500));
        assert_eq!(c.timeout_secs, 3);
        let c = NbsConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(c.timeout_secs, 1);
    }

    #[test]
    fn empty_url_keeps_default() {
        let c = NbsConfig::from_lookup(lookup(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn deserialize_partial() {
        let c: NbsConfig = serde_json::from_str(r#"{"timeout_secs":10}"#).unwrap();
        assert_eq!(c.timeout_secs, 10);
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
    }
}
