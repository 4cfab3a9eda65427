//! Local preference store
//!
//! A single JSON file the user edits by hand. The program only ever
//! creates it with empty defaults and reads it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Languages and frameworks the contributor knows or avoids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default)]
    pub frameworks: BTreeSet<String>,
    #[serde(default)]
    pub excluded_frameworks: BTreeSet<String>,
}

impl Preferences {
    /// Load preferences, creating the file with empty sets on first use
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            Self::default().save(path)?;
            tracing::debug!(path = %path.display(), "created default preferences");
        }

        Self::read(path)
    }

    /// Load preferences only if the file already exists
    pub fn load_existing(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::read(path).map(Some)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences: {}", path.display()))
    }

    fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))
    }
}

/// Render a tag set for display, e.g. `[python, rust]`
pub fn format_tags(tags: &BTreeSet<String>) -> String {
    let joined = tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay").join("coderelay.json");

        let prefs = Preferences::load_or_init(&path).unwrap();

        assert!(path.exists());
        assert!(prefs.languages.is_empty());
        assert!(prefs.frameworks.is_empty());
        assert!(prefs.excluded_frameworks.is_empty());
    }

    #[test]
    fn test_load_or_init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay").join("coderelay.json");

        let first = Preferences::load_or_init(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let second = Preferences::load_or_init(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(written, fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn test_reads_user_edits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay.json");
        fs::write(
            &path,
            r#"{"languages":["python","rust"],"frameworks":["flask"],"excluded_frameworks":["django"]}"#,
        )
        .unwrap();

        let prefs = Preferences::load_or_init(&path).unwrap();
        assert!(prefs.languages.contains("rust"));
        assert!(prefs.frameworks.contains("flask"));
        assert!(prefs.excluded_frameworks.contains("django"));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay.json");
        fs::write(&path, r#"{"languages":["go"]}"#).unwrap();

        let prefs = Preferences::load_or_init(&path).unwrap();
        assert_eq!(prefs.languages.len(), 1);
        assert!(prefs.excluded_frameworks.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay.json");
        fs::write(&path, "{languages: [").unwrap();

        let err = Preferences::load_or_init(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse preferences"));
    }

    #[test]
    fn test_load_existing_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coderelay.json");

        assert!(Preferences::load_existing(&path).unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_format_tags() {
        let tags: BTreeSet<String> = ["rust", "python"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_tags(&tags), "[python, rust]");
        assert_eq!(format_tags(&BTreeSet::new()), "[]");
    }
}
