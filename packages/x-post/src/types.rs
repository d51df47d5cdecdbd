//! X API v2 request and response types.

use serde::{Deserialize, Serialize};

/// Public permalink prefix for a post id.
const STATUS_URL: &str = "https://x.com/i/status";

/// A successfully created post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResult {
    /// Platform-assigned id. Empty when the response carried none.
    pub id: String,

    /// Post text as stored by the platform.
    pub text: String,
}

impl PostResult {
    /// Permalink for this post.
    pub fn url(&self) -> String {
        format!("{}/{}", STATUS_URL, self.id)
    }
}

// =============================================================================
// Create Post
// =============================================================================

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest<'a> {
    pub text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyTo<'a>>,
}

impl<'a> CreatePostRequest<'a> {
    pub fn new(text: &'a str, reply_to: Option<&'a str>) -> Self {
        Self {
            text,
            reply: reply_to.map(|id| ReplyTo {
                in_reply_to_tweet_id: id,
            }),
        }
    }
}

/// Reply linkage for a new post.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyTo<'a> {
    pub in_reply_to_tweet_id: &'a str,
}

/// Success response of `POST /2/tweets`. Every field is optional; a missing id
/// is not an error at this layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub data: Option<CreatedPost>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedPost {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_reply() {
        let body = serde_json::to_value(CreatePostRequest::new("hello", None)).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_request_with_reply() {
        let body = serde_json::to_value(CreatePostRequest::new("hello", Some("42"))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "text": "hello",
                "reply": { "in_reply_to_tweet_id": "42" }
            })
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let parsed: CreatePostResponse = serde_json::from_str(r#"{"data":{"text":"hi"}}"#).unwrap();
        let data = parsed.data.unwrap();
        assert!(data.id.is_none());
        assert_eq!(data.text.as_deref(), Some("hi"));

        let empty: CreatePostResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_post_url() {
        let post = PostResult {
            id: "1234".into(),
            text: "x".into(),
        };
        assert_eq!(post.url(), "https://x.com/i/status/1234");
    }
}
