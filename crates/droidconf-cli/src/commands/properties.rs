use std::path::Path;

use miette::Result;

use droidconf_ops::find_project_root;
use droidconf_ops::ops_properties;
use droidconf_util::errors::ConfigError;

pub fn exec(properties: Option<&Path>, reveal: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
    let project_root = find_project_root(&cwd)?;
    tracing::debug!("project root: {}", project_root.display());

    let listing = ops_properties::list(&project_root, properties, reveal)?;
    if listing.entries.is_empty() {
        println!("No local properties configured.");
        let state = if listing.exists { "empty" } else { "not found" };
        println!("  {}: {state}", listing.path.display());
        return Ok(());
    }

    println!(
        "{} ({} entries):",
        listing.path.display(),
        listing.entries.len()
    );
    for (key, value) in &listing.entries {
        println!("  {} = {}", key, value);
    }
    Ok(())
}
