//! # CareOrbit Client
//!
//! Typed adapter over the CareOrbit REST API.
//!
//! Each call maps to exactly one HTTP request against the configured base URL and returns the
//! decoded wire type from `careorbit-types`. Non-success responses surface as
//! [`ClientError::Api`] with the status and the server-supplied message.
//!
//! There are no retries, no backoff and no client-side timeout policy: transport failures are
//! returned to the caller as they happen.

pub mod client;
pub mod config;

pub use client::CareOrbitClient;
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};

/// Errors returned by the CareOrbit client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Results that can fail with a [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;
