use anyhow::Result;
use colored::Colorize;

use coderelay::preferences::{format_tags, Preferences};
use coderelay::prompt::{Prompter, Terminal};
use coderelay::{opener, Config};

pub fn execute(config: &Config) -> Result<()> {
    let path = config.preferences_path();
    let prefs = Preferences::load_or_init(&path)?;

    println!("Your preferences:");
    println!(
        "{}",
        "Languages/frameworks are represented in an ID-ish format based on the full name (eg Tailwind CSS > tailwindcss)"
            .dimmed()
    );
    println!("Languages: {}", format_tags(&prefs.languages));
    println!("Frameworks: {}", format_tags(&prefs.frameworks));
    println!("Excluded frameworks: {}", format_tags(&prefs.excluded_frameworks));
    println!();

    if Terminal.confirm("Do you want to change your preferences (y/n)")? {
        opener::open_path(&path)?;
    }

    Ok(())
}
