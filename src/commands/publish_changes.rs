use anyhow::Result;

use coderelay::prompt::Terminal;
use coderelay::{publish, Config};

pub fn execute(config: &Config, project_name: &str) -> Result<()> {
    publish::publish_changes(config, project_name, &mut Terminal)?;
    Ok(())
}
