//! Remote catalog of projects looking for contributors
//!
//! The catalog is a JSON array stored in a GitHub repository and served
//! through the "get file contents" API, so the payload arrives wrapped in
//! a `{ "content": "<base64>" }` envelope.

use anyhow::{Context, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::progress;

/// A project from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    pub git: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// Fields this version doesn't know about, kept so the workspace
    /// snapshot is a full copy of the catalog record.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The piece of work a maintainer asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub desc: String,
}

impl Project {
    /// Task description, empty when the catalog entry has none
    pub fn task_desc(&self) -> &str {
        self.task.as_ref().map(|t| t.desc.as_str()).unwrap_or("")
    }
}

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
}

/// Fetch and decode the catalog
pub fn fetch_projects(url: &str) -> Result<Vec<Project>> {
    let body = progress::with_spinner("⏳ Fetching repos...", || download(url))?;
    parse_contents_response(&body)
}

fn download(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("coderelay-cli")
        .timeout(Duration::from_secs(30))
        .build()?;

    tracing::debug!(url, "fetching catalog");

    let response = client
        .get(url)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .context("Failed to connect to the project catalog")?;

    let status = response.status();
    if !status.is_success() {
        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("GitHub API rate limit may have been exceeded");
        }
        anyhow::bail!("Project catalog request failed with HTTP {}", status);
    }

    response
        .text()
        .context("Failed to read the project catalog response")
}

/// Decode a contents-API response body into the project list
pub fn parse_contents_response(body: &str) -> Result<Vec<Project>> {
    let envelope: ContentsResponse =
        serde_json::from_str(body).context("Catalog response is missing a `content` field")?;

    // GitHub wraps the base64 payload at 60 columns
    let encoded: String = envelope
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .context("Catalog content is not valid base64")?;
    let json = String::from_utf8(bytes).context("Catalog content is not valid UTF-8")?;

    serde_json::from_str(&json).context("Failed to parse the project catalog JSON")
}

/// Look up a project by its exact name
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.name == name)
}
