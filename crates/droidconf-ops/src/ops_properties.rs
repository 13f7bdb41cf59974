//! Operation: inspect the local properties file.

use std::path::{Path, PathBuf};

use droidconf_core::properties::Properties;

const MASK: &str = "********";

/// The entries of a properties file, ready for display.
pub struct PropertiesListing {
    pub path: PathBuf,
    pub exists: bool,
    pub entries: Vec<(String, String)>,
}

/// List the properties of the project. Values are masked unless `reveal`
/// is set, since the file usually holds API keys and signing secrets.
pub fn list(
    project_dir: &Path,
    explicit: Option<&Path>,
    reveal: bool,
) -> miette::Result<PropertiesListing> {
    let path = crate::properties_path(project_dir, explicit);
    let props = Properties::load(&path)?;
    let entries = props
        .iter()
        .map(|(key, value)| {
            let shown = if reveal { value } else { MASK };
            (key.to_string(), shown.to_string())
        })
        .collect();
    Ok(PropertiesListing {
        path,
        exists: props.exists(),
        entries,
    })
}
