pub mod ops_properties;
pub mod ops_render;
pub mod ops_resolve;

use std::path::{Path, PathBuf};

use droidconf_core::PROJECT_FILE;
use droidconf_util::errors::ConfigError;
use droidconf_util::fs::find_ancestor_with;

/// Locate the directory holding `Droidconf.toml`, starting at `start` and
/// walking up.
pub fn find_project_root(start: &Path) -> miette::Result<PathBuf> {
    find_ancestor_with(start, PROJECT_FILE).ok_or_else(|| {
        ConfigError::Project {
            message: format!(
                "Could not find {PROJECT_FILE} in {} or any parent",
                start.display()
            ),
        }
        .into()
    })
}

/// The properties file for a project: an explicit override, or
/// `local.properties` next to `Droidconf.toml`.
pub fn properties_path(project_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_dir.join(path),
        None => project_dir.join(droidconf_core::LOCAL_PROPERTIES),
    }
}
