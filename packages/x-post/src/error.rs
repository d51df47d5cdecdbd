//! Error types for the X posting client.

use thiserror::Error;

use crate::types::PostResult;

/// Result type for X posting operations.
pub type Result<T> = std::result::Result<T, XPostError>;

/// X posting client errors.
#[derive(Debug, Error)]
pub enum XPostError {
    /// One or more credentials are blank. Raised before any network call.
    #[error("Missing X API credentials: {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<&'static str> },

    /// Configuration error (invalid settings, HTTP client construction)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Network error (DNS, connection reset, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the posting endpoint
    #[error("X API error {status}: {body}")]
    Platform { status: u16, body: String },

    /// Request signing failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Parse error (invalid JSON in a success response)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A thread failed part-way. `posted` holds the posts that are already live.
    #[error("Thread failed after {} post(s) were published: {source}", .posted.len())]
    PartialThread {
        posted: Vec<PostResult>,
        #[source]
        source: Box<XPostError>,
    },
}

impl XPostError {
    /// Whether a fresh, newly signed attempt could succeed.
    ///
    /// Nothing in this crate retries automatically.
    pub fn is_retryable(&self) -> bool {
        match self {
            XPostError::Timeout(_) | XPostError::Network(_) => true,
            XPostError::PartialThread { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Number of posts already published when this error was raised.
    pub fn posted_count(&self) -> usize {
        match self {
            XPostError::PartialThread { posted, .. } => posted.len(),
            _ => 0,
        }
    }

    /// HTTP status of the failing request, if the platform answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            XPostError::Platform { status, .. } => Some(*status),
            XPostError::PartialThread { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for XPostError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            XPostError::Timeout(e.to_string())
        } else {
            XPostError::Network(e.to_string())
        }
    }
}
