//! Fork-and-push workflow for a finished workspace

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::git::{Git, RepoUrl};
use crate::prompt::Prompter;
use crate::workspace;

/// Subject line of every Code Relay commit
pub const COMMIT_SUBJECT: &str = "Code Relay";

/// Remote name used for the contributor's fork
pub const FORK_REMOTE: &str = "fork";

/// Result of [`publish_changes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Pushed; open this URL to create the pull request
    Published { pull_request_url: String },
    /// Nothing staged after `git add`
    NothingToPublish,
    /// User declined the commit
    Aborted,
}

/// Commit the workspace's changes and push them to the user's fork
pub fn publish_changes(
    config: &Config,
    name: &str,
    prompter: &mut dyn Prompter,
) -> Result<PublishOutcome> {
    workspace::validate_project_name(name)?;

    let workspace_dir: PathBuf = config.workspace_dir(name);
    if !workspace_dir.is_dir() {
        anyhow::bail!(
            "⚠️  Could not find project {} at {}\n\
             \n\
             Start it first with: coderelay start-project {}",
            name,
            workspace_dir.display(),
            name
        );
    }

    let git = Git::new(&config.git);
    if !git.is_installed() {
        anyhow::bail!("⚠️  Please install git first.");
    }

    // Without its own .git, every command below would hit an enclosing checkout
    if !git.is_repo_root(&workspace_dir)? {
        anyhow::bail!(
            "⚠️  Git repository for {} not found at {}\n\
             \n\
             The workspace is incomplete. Start over with: coderelay start-project {}",
            name,
            workspace_dir.display(),
            name
        );
    }

    let project = workspace::read_metadata(&workspace_dir)?;
    let upstream = RepoUrl::parse(&project.git)
        .with_context(|| format!("Unrecognized repository URL for {}", project.name))?;
    let branch = git
        .current_branch(&workspace_dir)
        .context("Check out a branch before publishing")?;

    println!(
        "Only the authors of {} can push to it directly, so you'll publish through a fork.",
        project.name
    );
    println!("  1. Open {}", upstream.web_url().cyan());
    println!("  2. Click \"Fork\" and create the fork under your account");
    println!("  3. Copy the URL of your fork");
    println!();

    let fork_input = prompter.input("Paste the URL of your fork")?;
    let fork = RepoUrl::parse(&fork_input)?;

    // The remote may already exist from an earlier attempt
    if let Err(e) = git.add_remote(&workspace_dir, FORK_REMOTE, &fork_input) {
        tracing::warn!(error = %e, "fork remote not added, updating its URL instead");
    }
    git.set_remote_url(&workspace_dir, FORK_REMOTE, &fork_input)?;

    git.add_all(&workspace_dir)?;
    let staged = git.staged_files(&workspace_dir)?;
    if staged.is_empty() {
        println!("No changes to publish.");
        return Ok(PublishOutcome::NothingToPublish);
    }

    println!("Changed files:");
    for file in &staged {
        println!("  {}", file);
    }
    println!();

    if !prompter.confirm("Commit and push these changes (y/n)")? {
        println!("Aborting.");
        return Ok(PublishOutcome::Aborted);
    }

    git.commit(&workspace_dir, COMMIT_SUBJECT, project.task_desc())?;

    git.push(&workspace_dir, FORK_REMOTE, "HEAD")
        .with_context(|| format!("Could not push to {}", fork_input))?;

    let pull_request_url = upstream.compare_url(&fork, &branch);
    println!("{}", "✓ Changes pushed to your fork".green());
    println!("Open a pull request here:");
    println!("  {}", pull_request_url);

    Ok(PublishOutcome::Published { pull_request_url })
}
