//! Client configuration — where the coaching backend lives.

use url::Url;

use crate::error::ConfigError;

/// Fixed fallback when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Explicit base-URL override, wins over everything.
pub const ENV_API_URL: &str = "THRYVE_API_URL";

/// Development host (the machine running the backend on port 8000).
pub const ENV_DEV_HOST: &str = "THRYVE_DEV_HOST";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the coaching backend.
    pub base_url: Url,
}

impl ClientConfig {
    /// Build a config from an explicit base URL string.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { base_url })
    }

    /// Resolve the base URL from the environment.
    ///
    /// Order: `THRYVE_API_URL` override > `THRYVE_DEV_HOST` (mapped to
    /// `http://{host}:8000`) > [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(explicit) = std::env::var(ENV_API_URL) {
            return Self::new(&explicit);
        }
        if let Ok(host) = std::env::var(ENV_DEV_HOST) {
            return Self::new(&format!("http://{host}:8000"));
        }
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a well-formed constant
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_parses() {
        let cfg = ClientConfig::new("https://api.thryve.example").unwrap();
        assert_eq!(cfg.base_url.scheme(), "https");
        assert_eq!(cfg.base_url.host_str(), Some("api.thryve.example"));
    }

    #[test]
    fn invalid_url_is_an_error_not_a_panic() {
        let err = ClientConfig::new("not a url").unwrap_err();
        match err {
            ConfigError::InvalidBaseUrl { value, .. } => assert_eq!(value, "not a url"),
        }
    }

    #[test]
    fn default_points_at_localhost() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url.as_str(), "http://localhost:8000/");
    }
}
