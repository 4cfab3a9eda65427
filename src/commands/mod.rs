pub mod list_repos;
pub mod publish_changes;
pub mod start_project;
pub mod user_prefs;
