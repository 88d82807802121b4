//! Client configuration.

use crate::client::DEFAULT_BASE_URL;
use crate::error::ApiError;

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "PETFRIENDS_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base url must start with http:// or https://, got {base_url:?}"
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Reads `PETFRIENDS_BASE_URL`, falling back to the live host.
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_live_host() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn accepts_http_urls() {
        let config = ClientConfig::new(" http://127.0.0.1:3000 ").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn rejects_non_http_urls() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
