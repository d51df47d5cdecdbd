//! Pure xAI REST API client
//!
//! Sends a prompt to the Responses endpoint (with live X search enabled by
//! default) and returns the raw payload together with the extracted answer text.
//!
//! # Example
//!
//! ```rust,ignore
//! use xai_client::{ResponsesRequest, XaiClient, XaiConfig};
//!
//! let client = XaiClient::new(XaiConfig::new(api_key))?;
//! let response = client
//!     .respond(ResponsesRequest::new(client.model(), "What is trending in Rust today?"))
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod extract;
pub mod types;

pub use error::{Result, XaiError};
pub use extract::extract_text;
pub use types::{ResponsesRequest, Tool, XaiResponse};

use std::time::Duration;

use reqwest::{header, Client};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.x.ai";
pub const DEFAULT_MODEL: &str = "grok-4-1-fast-reasoning";

/// Search-backed generations are slow; bound them generously.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Error bodies are cut to this many characters.
const MAX_ERROR_BODY_CHARS: usize = 4000;

/// Client configuration.
#[derive(Clone)]
pub struct XaiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl XaiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for XaiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XaiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Pure xAI API client.
#[derive(Clone)]
pub struct XaiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl XaiClient {
    /// Create a client. A blank API key is a configuration error.
    pub fn new(config: XaiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(XaiError::Config("XAI_API_KEY is not set".into()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| XaiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt to `/v1/responses`.
    pub async fn respond(&self, request: ResponsesRequest) -> Result<XaiResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/v1/responses", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "xAI request failed");
                XaiError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!(status = %status, error = %body, "xAI API error");
            return Err(XaiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| XaiError::Parse(format!("Failed to parse response: {}", e)))?;
        let text = extract_text(&raw);

        debug!(
            model = %request.model,
            tools = request.tools.len(),
            duration_ms = start.elapsed().as_millis(),
            "xAI response"
        );

        Ok(XaiResponse { raw, text })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn test_client(mock_server: &MockServer) -> XaiClient {
        XaiClient::new(XaiConfig::new("xai-test").with_base_url(format!("{}/", mock_server.uri())))
            .unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = XaiConfig::new("xai-test")
            .with_base_url("https://proxy.example.com///")
            .with_model("grok-3")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://proxy.example.com");
        assert_eq!(config.model, "grok-3");
        assert!(!format!("{:?}", config).contains("xai-test"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = XaiClient::new(XaiConfig::new("  ")).err().unwrap();
        assert!(matches!(err, XaiError::Config(_)));
    }

    #[tokio::test]
    async fn test_respond_sends_bearer_and_extracts_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .and(header("authorization", "Bearer xai-test"))
            .and(body_json(json!({
                "model": "grok-4-1-fast-reasoning",
                "input": "trends?",
                "tools": [{ "type": "x_search" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [{ "content": [{ "type": "output_text", "text": "Rust 2026 edition" }] }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let response = client
            .respond(ResponsesRequest::new(client.model(), "trends?"))
            .await
            .unwrap();

        assert_eq!(response.text, "Rust 2026 edition");
        assert!(response.raw.get("output").is_some());
    }

    #[tokio::test]
    async fn test_respond_api_error_truncated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(ResponseTemplate::new(429).set_body_string("r".repeat(9000)))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        match client.respond(ResponsesRequest::new("grok-4", "x")).await {
            Err(XaiError::Api { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body.len(), 4000);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_respond_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "output_text": "late" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = XaiClient::new(
            XaiConfig::new("xai-test")
                .with_base_url(mock_server.uri())
                .with_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        let err = client
            .respond(ResponsesRequest::new("grok-4", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, XaiError::Timeout(_)), "got {:?}", err);
    }
}
