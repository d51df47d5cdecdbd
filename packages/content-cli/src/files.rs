//! Timestamped artifacts on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// `YYYYMMDD_HHMMSSZ`, sortable by name.
pub fn timestamp_slug(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%SZ").to_string()
}

/// Write `content` to `dir/filename`, creating `dir` as needed.
pub fn save_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(filename);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Newest artifact in `dir` whose name ends with `suffix`.
///
/// Artifact names start with a timestamp slug, so the greatest name wins.
/// A missing directory yields `None`.
pub fn latest_artifact(dir: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(suffix))
        .collect();
    names.sort();

    Ok(names.pop().map(|name| dir.join(name)))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_timestamp_slug() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 4, 5, 6).unwrap();
        assert_eq!(timestamp_slug(at), "20260307_040506Z");
    }

    #[test]
    fn test_save_file_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data/trend-scout");

        let path = save_file(&dir, "a.txt", "hello").unwrap();

        assert_eq!(path, dir.join("a.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_latest_artifact_picks_greatest_name() {
        let tmp = tempfile::tempdir().unwrap();
        for name in [
            "20260101_000000Z_digest.txt",
            "20260301_120000Z_digest.txt",
            "20260201_000000Z_digest.txt",
            "20260401_000000Z_digest.json",
        ] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }
        fs::create_dir(tmp.path().join("zzz.txt")).unwrap();

        let latest = latest_artifact(tmp.path(), ".txt").unwrap();
        assert_eq!(latest, Some(tmp.path().join("20260301_120000Z_digest.txt")));
    }

    #[test]
    fn test_latest_artifact_none_cases() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(latest_artifact(tmp.path(), ".txt").unwrap(), None);
        assert_eq!(latest_artifact(&tmp.path().join("missing"), ".txt").unwrap(), None);
    }
}
