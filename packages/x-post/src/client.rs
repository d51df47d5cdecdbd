//! Post and thread submission against `POST /2/tweets`.

use reqwest::{header, Client};
use tracing::{debug, info, instrument, warn};

use crate::config::{Credentials, XPostConfig};
use crate::error::{Result, XPostError};
use crate::oauth;
use crate::types::{CreatePostRequest, CreatePostResponse, PostResult};

/// Create-post endpoint, relative to the configured origin.
pub const CREATE_POST_PATH: &str = "/2/tweets";

/// Error bodies are cut to this many characters.
const MAX_ERROR_BODY_CHARS: usize = 2000;

/// X API v2 posting client authenticated with OAuth 1.0a user context.
#[derive(Clone)]
pub struct XPostClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl XPostClient {
    /// Build a client. Blank credentials fail here, before any request is made.
    pub fn new(config: XPostConfig) -> Result<Self> {
        config.credentials.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("x-post/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| XPostError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            credentials: config.credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full create-post URL. Also the URL that gets signed.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CREATE_POST_PATH)
    }

    /// Publish one post, optionally as a reply.
    ///
    /// An empty `reply_to` is treated as no reply. A success response without
    /// `data.id` yields an empty id rather than an error.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn post(&self, text: &str, reply_to: Option<&str>) -> Result<PostResult> {
        let reply_to = match reply_to {
            Some("") => {
                warn!("Parent post id is empty, publishing without reply linkage");
                None
            }
            other => other,
        };

        let url = self.endpoint();
        let body = CreatePostRequest::new(text, reply_to);

        // Signed fresh on every call; JSON bodies are not part of the signature.
        let authorization = oauth::authorization_header("POST", &url, &self.credentials)?;

        debug!(reply_to = reply_to.unwrap_or(""), "Submitting post");

        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Post request failed");
                XPostError::from(e)
            })?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let body = truncate_chars(&response_text, MAX_ERROR_BODY_CHARS);
            warn!(status = %status, error = %body, "X API error");
            return Err(XPostError::Platform {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CreatePostResponse = serde_json::from_str(&response_text)
            .map_err(|e| XPostError::Parse(format!("Failed to parse create-post response: {}", e)))?;
        let data = parsed.data.unwrap_or_default();

        let id = data.id.unwrap_or_default();
        if id.is_empty() {
            warn!("Create-post response has no data.id; replies to this post cannot be linked");
        } else {
            info!(post_id = %id, "Post published");
        }

        Ok(PostResult {
            id,
            text: data.text.unwrap_or_else(|| text.to_string()),
        })
    }

    /// Publish `texts` as a reply chain, strictly one after another.
    ///
    /// Stops at the first failure with [`XPostError::PartialThread`], which carries
    /// every post already published. Those posts stay live.
    #[instrument(skip(self, texts), fields(posts = texts.len()))]
    pub async fn post_thread<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<PostResult>> {
        let mut posted: Vec<PostResult> = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            let parent = posted.last().map(|p| p.id.as_str());
            let result = self.post(text.as_ref(), parent).await;

            match result {
                Ok(result) => {
                    debug!(index, post_id = %result.id, "Thread post published");
                    posted.push(result);
                }
                Err(e) => {
                    warn!(
                        index,
                        published = posted.len(),
                        error = %e,
                        "Thread aborted"
                    );
                    return Err(XPostError::PartialThread {
                        posted,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(posted)
    }
}

/// First `max` characters of `s`, never splitting a character.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
