use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coderelay::Config;

mod commands;

/// Recommends open-source projects that want help, a couple lines of code at a time
#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure what projects you want to see
    UserPrefs,

    /// List repos that you can help with
    ListRepos,

    /// Clone a project to start working on
    StartProject {
        /// Project name, as shown by list-repos
        project_name: String,
    },

    /// Publish your changes to a fork and open a pull request
    PublishChanges {
        /// Project name, as shown by list-repos
        project_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::load()?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::UserPrefs => {
            commands::user_prefs::execute(&config)?;
        }
        Commands::ListRepos => {
            commands::list_repos::execute(&config)?;
        }
        Commands::StartProject { project_name } => {
            commands::start_project::execute(&config, &project_name)?;
        }
        Commands::PublishChanges { project_name } => {
            commands::publish_changes::execute(&config, &project_name)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `CODERELAY_LOG` (default: warnings only)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CODERELAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
