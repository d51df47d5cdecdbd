//! X API v2 posting client with OAuth 1.0a request signing.
//!
//! Publishes single posts and reply-chained threads in a user context. Each
//! request is signed with HMAC-SHA1 over a fresh nonce and timestamp.
//!
//! # Example
//!
//! ```rust,ignore
//! use x_post::{Credentials, XPostClient, XPostConfig};
//!
//! let credentials = Credentials::new(api_key, api_secret, access_token, access_token_secret);
//! let client = XPostClient::new(XPostConfig::new(credentials))?;
//!
//! // Single post
//! let post = client.post("Hello!", None).await?;
//! println!("{}", post.url());
//!
//! // Thread: each post replies to the one before it
//! let thread = client.post_thread(&["1/3 ...", "2/3 ...", "3/3 ..."]).await?;
//! ```
//!
//! A failed thread returns [`XPostError::PartialThread`] with the posts that are
//! already live:
//!
//! ```rust,ignore
//! match client.post_thread(&texts).await {
//!     Ok(posts) => println!("{} posts", posts.len()),
//!     Err(e) => eprintln!("{} live before failure: {}", e.posted_count(), e),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod oauth;
pub mod types;

pub use client::{XPostClient, CREATE_POST_PATH};
pub use config::{Credentials, XPostConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Result, XPostError};
pub use oauth::OAuthParams;
pub use types::PostResult;
