use anyhow::Result;

use coderelay::prompt::{Prompter, Terminal};
use coderelay::workspace::{self, StartOutcome};
use coderelay::{catalog, opener, Config};

pub fn execute(config: &Config, project_name: &str) -> Result<()> {
    let projects = catalog::fetch_projects(&config.catalog_url)?;

    let mut prompter = Terminal;
    let path = match workspace::start_project(config, &projects, project_name, &mut prompter)? {
        StartOutcome::Started(path) => path,
        StartOutcome::Aborted => return Ok(()),
    };

    println!("Project {} downloaded to {}.", project_name, path.display());
    if prompter.confirm("Do you want to open the project now (y/n)")? {
        opener::open_path(&path)?;
    }

    Ok(())
}
