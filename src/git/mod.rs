//! Git plumbing for coderelay
//!
//! Handles:
//! - Cloning projects into workspaces
//! - Fork remote setup, staging, committing and pushing
//! - Parsing hosted repository URLs

mod operations;
mod url;

pub use operations::Git;
pub use url::RepoUrl;
