pub mod catalog;
pub mod config;
pub mod git;
pub mod matcher;
pub mod opener;
pub mod paths;
pub mod preferences;
pub mod progress;
pub mod prompt;
pub mod publish;
pub mod workspace;

// Re-export commonly used types
pub use catalog::Project;
pub use config::Config;
pub use matcher::Verdict;
pub use preferences::Preferences;
