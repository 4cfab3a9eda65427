//! Shared fixtures: local git repositories standing in for GitHub

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use coderelay::Project;

/// Git-backed tests return early without git; say so on stderr
pub fn git_available() -> bool {
    let found = which::which("git").is_ok();
    if !found {
        eprintln!("git not installed, skipping");
    }
    found
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn set_identity(dir: &Path) {
    git(dir, &["config", "user.name", "Relay Tester"]);
    git(dir, &["config", "user.email", "relay@example.com"]);
}

/// A non-bare repository on `main` with one commit and a .gitignore
pub fn upstream_repo(root: &Path) -> PathBuf {
    let dir = root.join("upstream");
    fs::create_dir_all(&dir).unwrap();
    git(&dir, &["init", "-q"]);
    git(&dir, &["checkout", "-q", "-b", "main"]);
    set_identity(&dir);
    fs::write(dir.join("README.md"), "# foo\n").unwrap();
    fs::write(dir.join(".gitignore"), "target/\n").unwrap();
    git(&dir, &["add", "-A"]);
    git(&dir, &["commit", "-q", "-m", "Initial commit"]);
    dir
}

/// An empty bare repository at `<root>/forks/<owner>/<repo>.git`
pub fn bare_fork(root: &Path, owner: &str, repo: &str) -> PathBuf {
    let dir = root.join("forks").join(owner).join(format!("{}.git", repo));
    fs::create_dir_all(&dir).unwrap();
    git(&dir, &["init", "-q", "--bare"]);
    dir
}

pub fn project(name: &str, git_url: &str) -> Project {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "desc": "d",
        "languages": ["python"],
        "frameworks": [],
        "git": git_url,
        "task": { "desc": "Add a --verbose flag" }
    }))
    .unwrap()
}
