//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! Every call to [`authorization_header`] draws a fresh nonce and timestamp, so a
//! header must never be reused for a retried request.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore;
use sha1::Sha1;

use crate::config::Credentials;
use crate::error::{Result, XPostError};

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

/// Everything except the RFC 3986 unreserved set `A-Z a-z 0-9 - . _ ~`.
///
/// Unlike form encoding this escapes `! ' ( ) *` as well.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string per RFC 3986 with uppercase hex escapes.
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// 16 random bytes as 32 lowercase hex characters.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// The six protocol parameters that accompany every signed request, kept sorted
/// by name so the header renders in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthParams {
    params: BTreeMap<String, String>,
}

impl OAuthParams {
    pub fn new(credentials: &Credentials, nonce: &str, timestamp: i64) -> Self {
        let params = BTreeMap::from([
            ("oauth_consumer_key".to_string(), credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), credentials.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ]);
        Self { params }
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Render as an `Authorization` header value with `signature` added.
    pub fn into_header(mut self, signature: String) -> String {
        self.params.insert("oauth_signature".to_string(), signature);

        let header = self
            .params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", header)
    }
}

/// Canonical `METHOD&url&params` string that gets signed.
///
/// `url` must be the bare endpoint without a query string. The parameter string
/// is encoded twice: once per key and value, then once more as a whole.
pub fn signature_base_string(method: &str, url: &str, params: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();

    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// Base64 HMAC-SHA1 of `base_string` keyed by `consumer_secret&token_secret`.
pub fn compute_signature(base_string: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| XPostError::Signing(e.to_string()))?;
    mac.update(base_string.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// `Authorization` header value for one request, with a fresh nonce and the
/// current time.
pub fn authorization_header(method: &str, url: &str, credentials: &Credentials) -> Result<String> {
    let nonce = generate_nonce();
    let timestamp = chrono::Utc::now().timestamp();
    authorization_header_with(method, url, credentials, &nonce, timestamp)
}

/// Deterministic variant of [`authorization_header`].
pub fn authorization_header_with(
    method: &str,
    url: &str,
    credentials: &Credentials,
    nonce: &str,
    timestamp: i64,
) -> Result<String> {
    let params = OAuthParams::new(credentials, nonce, timestamp);

    let base_string = signature_base_string(method, url, params.as_map());
    let signature = compute_signature(
        &base_string,
        &credentials.consumer_secret,
        &credentials.access_token_secret,
    )?;

    Ok(params.into_header(signature))
}
