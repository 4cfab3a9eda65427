use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::paths;

/// Where the catalog of open projects is published.
pub const DEFAULT_CATALOG_URL: &str =
    "https://api.github.com/repos/KTibow/code-relay/contents/data/available_projects.json";

/// Configuration for coderelay
///
/// Resolved once in `main` and handed to every operation that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-user config directory (the preference file lives under it)
    pub config_dir: PathBuf,
    /// Per-user documents directory (workspaces live under it)
    pub documents_dir: PathBuf,
    /// Contents-API endpoint serving the catalog
    pub catalog_url: String,
    /// Version-control binary
    pub git: String,
}

impl Config {
    /// Load configuration from the platform directories, with
    /// `CODERELAY_*` environment overrides.
    pub fn load() -> Result<Self> {
        let config_dir = match std::env::var_os("CODERELAY_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir().context("Could not determine your config directory")?,
        };

        let documents_dir = match std::env::var_os("CODERELAY_DOCUMENTS_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::document_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
                .context("Could not determine your documents directory")?,
        };

        let catalog_url = std::env::var("CODERELAY_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let git = std::env::var("CODERELAY_GIT").unwrap_or_else(|_| "git".to_string());

        Ok(Self {
            config_dir,
            documents_dir,
            catalog_url,
            git,
        })
    }

    /// Build a configuration rooted at explicit directories.
    pub fn with_dirs(config_dir: impl Into<PathBuf>, documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            documents_dir: documents_dir.into(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            git: "git".to_string(),
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        paths::preferences_path(&self.config_dir)
    }

    pub fn workspace_dir(&self, project_name: &str) -> PathBuf {
        paths::workspace::root(&self.documents_dir, project_name)
    }
}
