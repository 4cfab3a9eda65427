//! Low-level git operations
//!
//! Every call runs with an explicit working directory and fails with
//! git's stderr when the process exits non-zero.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Handle on the git binary
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check the binary is on PATH
    pub fn is_installed(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn output(&self, dir: &Path, args: &[&str], what: &str) -> Result<Output> {
        tracing::debug!(dir = %dir.display(), ?args, "running git");
        Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("Failed to execute git to {}", what))
    }

    fn run(&self, dir: &Path, args: &[&str], what: &str) -> Result<Output> {
        let output = self.output(dir, args, what)?;

        if !output.status.success() {
            anyhow::bail!(
                "Failed to {}: {}",
                what,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output)
    }

    /// Clone `url` into `target` (which must not exist or be empty)
    pub fn clone_repo(&self, url: &str, target: &Path) -> Result<()> {
        let parent = target.parent().unwrap_or(Path::new("."));
        let target_str = target.to_string_lossy();
        self.run(parent, &["clone", url, &target_str], "clone repository")?;
        Ok(())
    }

    /// Whether `dir` is the top level of its own repository.
    ///
    /// A plain directory nested inside some other checkout is not.
    pub fn is_repo_root(&self, dir: &Path) -> Result<bool> {
        let output = self.output(dir, &["rev-parse", "--show-toplevel"], "find repository root")?;
        if !output.status.success() {
            return Ok(false);
        }

        let toplevel = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        let (Ok(toplevel), Ok(dir)) = (toplevel.canonicalize(), dir.canonicalize()) else {
            return Ok(false);
        };
        Ok(toplevel == dir)
    }

    /// Get the current branch name
    pub fn current_branch(&self, repo: &Path) -> Result<String> {
        let output = self.run(repo, &["branch", "--show-current"], "get current branch")?;
        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if branch.is_empty() {
            anyhow::bail!("Not on a branch (detached HEAD)");
        }

        Ok(branch)
    }

    #[cfg(test)]
    fn remote_url(&self, repo: &Path, remote: &str) -> Result<String> {
        let output = self.output(repo, &["remote", "get-url", remote], "get remote URL")?;

        if !output.status.success() {
            anyhow::bail!("Remote '{}' not found", remote);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Add a git remote
    pub fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<()> {
        self.run(repo, &["remote", "add", name, url], "add remote")?;
        Ok(())
    }

    /// Point an existing remote at `url`
    pub fn set_remote_url(&self, repo: &Path, name: &str, url: &str) -> Result<()> {
        self.run(repo, &["remote", "set-url", name, url], "set remote URL")?;
        Ok(())
    }

    /// Stage all changes, including deletions and untracked files
    pub fn add_all(&self, repo: &Path) -> Result<()> {
        self.run(repo, &["add", "-A"], "stage changes")?;
        Ok(())
    }

    /// Names of staged files
    pub fn staged_files(&self, repo: &Path) -> Result<Vec<String>> {
        let output = self.run(
            repo,
            &["diff", "--cached", "--name-only"],
            "list staged changes",
        )?;

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Create a commit with a subject and optional body
    pub fn commit(&self, repo: &Path, subject: &str, body: &str) -> Result<()> {
        let mut args = vec!["commit", "-m", subject];
        if !body.trim().is_empty() {
            args.extend(["-m", body]);
        }
        self.run(repo, &args, "create commit")?;
        Ok(())
    }

    /// Push `refspec` to `remote`
    pub fn push(&self, repo: &Path, remote: &str, refspec: &str) -> Result<()> {
        self.run(repo, &["push", remote, refspec], "push")?;
        Ok(())
    }
}
