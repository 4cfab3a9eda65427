use anyhow::Result;

use coderelay::{catalog, matcher, Config, Preferences};

pub fn execute(config: &Config) -> Result<()> {
    let Some(prefs) = Preferences::load_existing(&config.preferences_path())? else {
        println!("Please run `coderelay user-prefs` to configure your preferences.");
        return Ok(());
    };

    let projects = catalog::fetch_projects(&config.catalog_url)?;
    if projects.is_empty() {
        println!("No projects are looking for help right now.");
        return Ok(());
    }

    for project in &projects {
        let verdict = matcher::classify(project, &prefs);
        println!("{}", matcher::colored_listing_line(project, verdict));
    }

    println!("Get started on one by running `coderelay start-project <project-name>`.");
    Ok(())
}
