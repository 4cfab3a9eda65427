//! Repository URL parsing

use anyhow::Result;

/// A hosted repository: `<host>/<owner>/<repo>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl RepoUrl {
    /// Parse a repository URL.
    ///
    /// Accepted shapes:
    /// - `https://github.com/owner/repo(.git)(/)`
    /// - `ssh://git@github.com(:22)/owner/repo(.git)`
    /// - `git@github.com:owner/repo(.git)`
    ///
    /// The path must be exactly `owner/repo`.
    pub fn parse(url: &str) -> Result<Self> {
        let trimmed = url.trim();

        let (host, path) = if let Some((scheme, rest)) = trimmed.split_once("://") {
            if !matches!(scheme, "https" | "http" | "ssh" | "git") {
                anyhow::bail!("Unsupported URL scheme '{}' in {}", scheme, url);
            }
            let (authority, path) = rest
                .split_once('/')
                .ok_or_else(|| anyhow::anyhow!("Missing repository path in {}", url))?;
            let host = authority.rsplit('@').next().unwrap_or(authority);
            let host = host.split(':').next().unwrap_or(host);
            (host, path)
        } else if let Some((authority, path)) = trimmed.split_once(':') {
            // scp-like syntax: user@host:owner/repo
            if !authority.contains('@') {
                anyhow::bail!("Not a repository URL: {}", url);
            }
            let host = authority.rsplit('@').next().unwrap_or(authority);
            (host, path)
        } else {
            anyhow::bail!("Not a repository URL: {}", url);
        };

        if host.is_empty() {
            anyhow::bail!("Missing host in {}", url);
        }

        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let parts: Vec<&str> = path.split('/').collect();

        match parts.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                host: host.to_string(),
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => anyhow::bail!(
                "Expected a URL of the form https://{}/<owner>/<repo>, got: {}",
                host,
                url
            ),
        }
    }

    /// Browser URL of the repository
    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repo)
    }

    /// Pull-request comparison page for `branch` on `fork` against this repo
    pub fn compare_url(&self, fork: &RepoUrl, branch: &str) -> String {
        format!(
            "{}/compare/{}...{}:{}",
            self.web_url(),
            branch,
            fork.owner,
            branch
        )
    }
}
