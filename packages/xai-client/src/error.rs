//! Error types for the xAI client.

use thiserror::Error;

/// Result type for xAI client operations.
pub type Result<T> = std::result::Result<T, XaiError>;

/// xAI client errors.
#[derive(Debug, Error)]
pub enum XaiError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request did not finish within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Network error (connection failed, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Parse error (invalid JSON)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for XaiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            XaiError::Timeout(e.to_string())
        } else {
            XaiError::Network(e.to_string())
        }
    }
}
