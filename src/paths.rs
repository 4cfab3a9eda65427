//! Single source of truth for the coderelay filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O, no validation,
//! no business logic. Every function is a pure function of the roots
//! resolved in [`crate::config::Config`].
//!
//! # User-Level Paths
//!
//! ```text
//! <config-dir>/coderelay/
//! └── coderelay.json           # Language/framework preferences
//!
//! <documents-dir>/code-relay/
//! └── <project>/               # One clone per project
//!     ├── .gitignore           # Gets a "coderelay.json" rule appended
//!     └── coderelay.json       # Snapshot of the catalog entry
//! ```

use std::path::{Path, PathBuf};

/// File name shared by the preference file and the workspace metadata.
pub const METADATA_FILE: &str = "coderelay.json";

// =============================================================================
// User Level
// =============================================================================

/// Preference file: `<config-dir>/coderelay/coderelay.json`
pub fn preferences_path(config_dir: &Path) -> PathBuf {
    config_dir.join("coderelay").join(METADATA_FILE)
}

/// Root of all workspaces: `<documents-dir>/code-relay/`
pub fn workspaces_dir(documents_dir: &Path) -> PathBuf {
    documents_dir.join("code-relay")
}

// =============================================================================
// Workspace Level (<documents-dir>/code-relay/<project>/)
// =============================================================================

/// Workspace-level paths.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use coderelay::paths::workspace;
///
/// let docs = Path::new("/home/user/Documents");
/// let root = workspace::root(docs, "foo");
/// assert_eq!(root, Path::new("/home/user/Documents/code-relay/foo"));
/// assert_eq!(
///     workspace::metadata_path(&root),
///     Path::new("/home/user/Documents/code-relay/foo/coderelay.json")
/// );
/// ```
pub mod workspace {
    use super::*;

    /// Clone location for a project: `<documents-dir>/code-relay/<name>/`
    pub fn root(documents_dir: &Path, name: &str) -> PathBuf {
        workspaces_dir(documents_dir).join(name)
    }

    /// Catalog snapshot: `<workspace>/coderelay.json`
    pub fn metadata_path(root: &Path) -> PathBuf {
        root.join(METADATA_FILE)
    }

    /// Ignore rules: `<workspace>/.gitignore`
    pub fn gitignore_path(root: &Path) -> PathBuf {
        root.join(".gitignore")
    }
}
