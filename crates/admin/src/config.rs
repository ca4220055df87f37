//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPDESK_API_BASE_URL` - Base URL of the backend (e.g., `https://api.shop.example`)
//!
//! ## Optional
//! - `SHOPDESK_REQUEST_TIMEOUT_SECS` - Uniform request timeout (default: 10)
//! - `SHOPDESK_TOKEN_FILE` - Path of the persisted token file
//!   (default: `$HOME/.shopdesk/tokens.json`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default request timeout, applied uniformly to every call.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin client configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the backend, normalized to end with a slash.
    pub base_url: Url,
    /// Uniform request timeout.
    pub request_timeout: Duration,
    /// Where [`crate::auth::FileTokenStore`] persists the token pair.
    pub token_path: PathBuf,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url = get_required_env("SHOPDESK_API_BASE_URL")?;
        let base_url = parse_base_url(&raw_url)?;

        let timeout_secs = get_env_or_default(
            "SHOPDESK_REQUEST_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPDESK_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let token_path = std::env::var("SHOPDESK_TOKEN_FILE").map_or_else(
            |_| default_token_path(),
            PathBuf::from,
        );

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            token_path,
        })
    }

    /// Build a config directly, for tests and embedding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn new(base_url: &str, token_path: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_path,
        })
    }
}

/// Parse and normalize the base URL so that `Url::join` resolves
/// `api/...` paths underneath it.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash)
        .map_err(|e| ConfigError::InvalidEnvVar("SHOPDESK_API_BASE_URL".to_string(), e.to_string()))
}

fn default_token_path() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(".shopdesk-tokens.json"),
        |home| PathBuf::from(home).join(".shopdesk").join("tokens.json"),
    )
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_appends_slash() {
        let url = parse_base_url("http://localhost:8000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_parse_base_url_keeps_existing_slash() {
        let url = parse_base_url("http://localhost:8000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_new_defaults_timeout_to_ten_seconds() {
        let config = AdminConfig::new("http://localhost:8000", PathBuf::from("/tmp/t.json"))
            .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_joined_paths_resolve_under_base() {
        let config = AdminConfig::new("http://localhost:8000/v2", PathBuf::from("/tmp/t.json"))
            .unwrap();
        let joined = config.base_url.join("api/products/").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:8000/v2/api/products/");
    }
}
