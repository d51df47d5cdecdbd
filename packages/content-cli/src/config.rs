//! Configuration resolution: CLI flag, then process env, then `.env`, then default.
//!
//! `.env` is loaded into the process environment without overriding variables
//! that are already set, which gives real env precedence over the file.

use std::env;
use std::path::PathBuf;

use x_post::{Credentials, XPostConfig};
use xai_client::XaiConfig;

/// Load `.env` from the working directory or any parent, if present.
///
/// Runs before tracing is set up so that `RUST_LOG` may come from the file;
/// the caller logs the outcome once the subscriber exists.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// First non-blank of `cli`, `lookup(key)`, else `fallback`.
pub fn resolve_with<F>(cli: Option<&str>, key: &str, fallback: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    cli.map(str::to_string)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| lookup(key).filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

fn from_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Overrides for the research client, as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct XaiOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

pub fn resolve_xai_config_with<F>(overrides: &XaiOverrides, lookup: F) -> XaiConfig
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = resolve_with(overrides.api_key.as_deref(), "XAI_API_KEY", "", &lookup);
    let base_url = resolve_with(
        overrides.base_url.as_deref(),
        "XAI_BASE_URL",
        xai_client::DEFAULT_BASE_URL,
        &lookup,
    );
    let model = resolve_with(
        overrides.model.as_deref(),
        "XAI_MODEL",
        xai_client::DEFAULT_MODEL,
        &lookup,
    );

    XaiConfig::new(api_key).with_base_url(base_url).with_model(model)
}

pub fn resolve_xai_config(overrides: &XaiOverrides) -> XaiConfig {
    resolve_xai_config_with(overrides, from_env)
}

/// Posting credentials. Blank values are kept; the client reports them.
pub fn resolve_x_post_config_with<F>(lookup: F) -> XPostConfig
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::new(
        resolve_with(None, "X_API_KEY", "", &lookup),
        resolve_with(None, "X_API_SECRET", "", &lookup),
        resolve_with(None, "X_ACCESS_TOKEN", "", &lookup),
        resolve_with(None, "X_ACCESS_TOKEN_SECRET", "", &lookup),
    );
    let base_url = resolve_with(None, "X_API_BASE_URL", x_post::DEFAULT_BASE_URL, &lookup);

    XPostConfig::new(credentials).with_base_url(base_url)
}

pub fn resolve_x_post_config() -> XPostConfig {
    resolve_x_post_config_with(from_env)
}
