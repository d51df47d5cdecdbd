//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, XPostError};

/// Default API origin. The create endpoint is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.x.com";

/// Upper bound for a single post submission.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The four OAuth 1.0a secrets for one user context.
///
/// `Debug` never prints the values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Names (as environment variables) of every blank field, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("X_API_KEY", &self.consumer_key),
            ("X_API_SECRET", &self.consumer_secret),
            ("X_ACCESS_TOKEN", &self.access_token),
            ("X_ACCESS_TOKEN_SECRET", &self.access_token_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail if any field is blank.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(XPostError::MissingCredentials { missing })
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn presence(value: &str) -> &'static str {
            if value.trim().is_empty() {
                "<unset>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("Credentials")
            .field("consumer_key", &presence(&self.consumer_key))
            .field("consumer_secret", &presence(&self.consumer_secret))
            .field("access_token", &presence(&self.access_token))
            .field("access_token_secret", &presence(&self.access_token_secret))
            .finish()
    }
}

/// Posting client configuration.
#[derive(Debug, Clone)]
pub struct XPostConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub timeout: Duration,
}

impl XPostConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom API origin (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_credentials_validate() {
        let creds = Credentials::new("ck", "cs", "at", "ats");
        assert!(creds.validate().is_ok());
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_blank_credentials_are_named() {
        let creds = Credentials::new("ck", "  ", "", "ats");
        assert_eq!(creds.missing(), vec!["X_API_SECRET", "X_ACCESS_TOKEN"]);

        match creds.validate() {
            Err(XPostError::MissingCredentials { missing }) => {
                assert_eq!(missing, vec!["X_API_SECRET", "X_ACCESS_TOKEN"]);
            }
            other => panic!("expected MissingCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("my-key", "my-secret", "", "tok-secret");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("my-key"));
        assert!(!rendered.contains("my-secret"));
        assert!(!rendered.contains("tok-secret"));
        assert!(rendered.contains("<unset>"));
    }

    #[test]
    fn test_config_builder() {
        let config = XPostConfig::new(Credentials::default())
            .with_base_url("http://127.0.0.1:9000/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(XPostConfig::new(Credentials::default()).base_url, DEFAULT_BASE_URL);
    }
}
