//! Client configuration.
//!
//! Resolved once at startup and passed into [`crate::CareOrbitClient`]. Nothing in this crate
//! reads environment variables during a request.

use reqwest::Url;

use crate::{ClientError, ClientResult};

/// Environment variable naming the API origin.
pub const API_URL_ENV: &str = "CAREORBIT_API_URL";

/// Origin used when no base URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Create a configuration for the given API origin.
    ///
    /// The URL must be absolute and use `http` or `https`. A path prefix is allowed and is kept
    /// in front of every `/api/...` path.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ClientError::InvalidBaseUrl(
                "base URL cannot be empty".into(),
            ));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{trimmed}: not a base URL"
            )));
        }

        Ok(Self { base_url: url })
    }

    /// Resolve from an optional environment value, falling back to [`DEFAULT_API_URL`] when the
    /// value is absent or blank.
    pub fn from_env_value(value: Option<String>) -> ClientResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self::new(value.as_deref().unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
