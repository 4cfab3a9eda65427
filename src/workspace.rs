//! Project workspaces
//!
//! A workspace is a clone of a catalog project under
//! `<documents>/code-relay/<name>/` plus a `coderelay.json` snapshot of
//! the catalog entry. The snapshot is kept out of version control with
//! an ignore rule.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::catalog::{self, Project};
use crate::config::Config;
use crate::git::Git;
use crate::paths;
use crate::progress;
use crate::prompt::Prompter;

const IGNORE_RULE: &str = "\n# Code Relay\ncoderelay.json\n";

/// Result of [`start_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Project cloned into this directory
    Started(PathBuf),
    /// User kept the existing directory
    Aborted,
}

/// Reject names that would resolve outside `<documents>/code-relay/`
pub fn validate_project_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => anyhow::bail!(
            "⚠️  Invalid project name '{}'\n\
             \n\
             Project names are single folder names, as shown by `coderelay list-repos`.",
            name
        ),
    }
}

/// Clone a catalog project into a fresh workspace
pub fn start_project(
    config: &Config,
    projects: &[Project],
    name: &str,
    prompter: &mut dyn Prompter,
) -> Result<StartOutcome> {
    validate_project_name(name)?;

    let git = Git::new(&config.git);
    if !git.is_installed() {
        anyhow::bail!(
            "⚠️  Please install git first.\n\
             \n\
             coderelay uses git to download projects and publish your changes.\n\
             See https://git-scm.com/downloads"
        );
    }

    let project = catalog::find_project(projects, name).ok_or_else(|| {
        anyhow::anyhow!(
            "⚠️  Could not find project {}.\n\
             \n\
             Run `coderelay list-repos` to see the available projects.",
            name
        )
    })?;

    let workspace = config.workspace_dir(name);
    if workspace.exists() {
        let question = format!(
            "Project at {} already exists. Delete it (y/n)",
            workspace.display()
        );
        if !prompter.confirm(&question)? {
            println!("Aborting.");
            return Ok(StartOutcome::Aborted);
        }
        fs::remove_dir_all(&workspace)
            .with_context(|| format!("Failed to delete {}", workspace.display()))?;
    }

    progress::with_spinner("⏳ Downloading the code...", || {
        create_workspace(&git, project, &workspace)
    })?;

    tracing::info!(project = name, path = %workspace.display(), "workspace ready");
    Ok(StartOutcome::Started(workspace))
}

fn create_workspace(git: &Git, project: &Project, workspace: &Path) -> Result<()> {
    if let Some(parent) = workspace.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    git.clone_repo(&project.git, workspace)
        .with_context(|| format!("Could not download {}", project.git))?;

    ensure_ignore_rule(workspace)?;
    write_metadata(workspace, project)
}

/// Append the coderelay.json ignore rule unless it is already present.
///
/// Returns whether the file was changed.
pub fn ensure_ignore_rule(workspace: &Path) -> Result<bool> {
    let path = paths::workspace::gitignore_path(workspace);
    let existing = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let already_ignored = existing.lines().any(|line| {
        let rule = line.trim();
        rule.strip_prefix('/').unwrap_or(rule) == paths::METADATA_FILE
    });
    if already_ignored {
        return Ok(false);
    }

    fs::write(&path, format!("{}{}", existing, IGNORE_RULE))
        .with_context(|| format!("Failed to update {}", path.display()))?;
    Ok(true)
}

/// Write the catalog snapshot into the workspace
pub fn write_metadata(workspace: &Path, project: &Project) -> Result<()> {
    let path = paths::workspace::metadata_path(workspace);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    project.serialize(&mut serializer)?;

    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))
}

/// Read the catalog snapshot back from a workspace
pub fn read_metadata(workspace: &Path) -> Result<Project> {
    let path = paths::workspace::metadata_path(workspace);
    if !path.exists() {
        anyhow::bail!(
            "⚠️  {} not found\n\
             \n\
             This folder wasn't set up by coderelay. Run\n\
             `coderelay start-project <project-name>` to start over.",
            path.display()
        );
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
