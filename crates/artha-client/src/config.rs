//! Client configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so a development build talks to the hosted backend out of the
//! box.

use std::env;

/// Base URL of the hosted backend, used when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://arthaversebackend-production.up.railway.app/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are appended to (no trailing slash).
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// - `ARTHA_API_BASE_URL` — backend base URL (default: hosted backend)
    /// - `ARTHA_API_TIMEOUT_SECS` — request timeout (default: 30)
    pub fn load() -> Result<Self, ConfigError> {
        let base_url =
            env::var("ARTHA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("ARTHA_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ARTHA_API_TIMEOUT_SECS".to_string()))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(ApiConfig {
            timeout_secs,
            ..ApiConfig::new(base_url)
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = ApiConfig::new("http://localhost:8080/api/");
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
