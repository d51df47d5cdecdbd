pub mod generate;
pub mod publish;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::config::XaiOverrides;
use crate::error::CliError;
use crate::files::latest_artifact;

/// Flags shared by every research subcommand.
#[derive(Debug, Clone, Args)]
pub struct ResearchArgs {
    /// xAI API key (falls back to XAI_API_KEY)
    #[arg(long)]
    pub xai_api_key: Option<String>,

    /// xAI base URL (falls back to XAI_BASE_URL)
    #[arg(long)]
    pub xai_base_url: Option<String>,

    /// Model name (falls back to XAI_MODEL)
    #[arg(long)]
    pub xai_model: Option<String>,

    /// Output directory for the json/txt/md artifacts
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print the request payload and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Also print the raw JSON response to stderr
    #[arg(long)]
    pub raw_json: bool,
}

impl ResearchArgs {
    pub fn overrides(&self) -> XaiOverrides {
        XaiOverrides {
            api_key: self.xai_api_key.clone(),
            base_url: self.xai_base_url.clone(),
            model: self.xai_model.clone(),
        }
    }
}

/// `--categories a,b,c` or the built-in list.
pub fn split_categories(csv: Option<&str>, defaults: &[&str]) -> Vec<String> {
    let parsed: Vec<String> = csv
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}

/// An explicit `--input` file, or the newest `.txt` artifact in `dir`.
pub fn resolve_input(input: Option<&Path>, dir: &Path, producer: &str) -> Result<PathBuf> {
    if let Some(path) = input {
        if !path.is_file() {
            return Err(CliError::Usage(format!("Input file not found: {}", path.display())).into());
        }
        return Ok(path.to_path_buf());
    }

    latest_artifact(dir, ".txt")?.ok_or_else(|| {
        CliError::Usage(format!(
            "No .txt files found in {}. Run `content {}` first.",
            dir.display(),
            producer
        ))
        .into()
    })
}

/// Read an input document, naming it and its path on failure.
pub fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {} {}", what, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_categories() {
        assert_eq!(split_categories(Some(" a , ,b "), &["x"]), vec!["a", "b"]);
        assert_eq!(split_categories(Some(" , "), &["x"]), vec!["x"]);
        assert_eq!(split_categories(None, &["x", "y"]), vec!["x", "y"]);
    }

    #[test]
    fn test_resolve_input_prefers_explicit_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("draft.md");
        std::fs::write(&file, "x").unwrap();

        let resolved = resolve_input(Some(&file), &tmp.path().join("nope"), "draft").unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_resolve_input_errors_are_usage() {
        let tmp = tempfile::tempdir().unwrap();

        let missing = resolve_input(Some(&tmp.path().join("gone.txt")), tmp.path(), "draft").unwrap_err();
        assert!(matches!(missing.downcast_ref::<CliError>(), Some(CliError::Usage(_))));

        let empty = resolve_input(None, tmp.path(), "news").unwrap_err();
        assert!(empty.to_string().contains("Run `content news` first"));
    }

    #[test]
    fn test_resolve_input_latest() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("20260101_000000Z_a.txt"), "old").unwrap();
        std::fs::write(tmp.path().join("20260102_000000Z_a.txt"), "new").unwrap();

        let resolved = resolve_input(None, tmp.path(), "news").unwrap();
        assert_eq!(resolved, tmp.path().join("20260102_000000Z_a.txt"));
    }

    #[test]
    fn test_read_input_error_names_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir_as_file = tmp.path().to_path_buf();

        let err = read_input(&dir_as_file, "digest").unwrap_err();
        assert!(err
            .to_string()
            .starts_with(&format!("Failed to read digest {}", dir_as_file.display())));
    }
}
