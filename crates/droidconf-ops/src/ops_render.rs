//! Operation: render a manifest template with resolved placeholders.

use std::path::{Path, PathBuf};

use droidconf_util::errors::ConfigError;

use crate::ops_resolve::{self, ResolveOptions};

/// Result of a render operation.
pub enum RenderResult {
    Written(PathBuf),
    Rendered(String),
}

/// Resolve the project, then substitute placeholders into `template`.
///
/// With `output` the rendered manifest is written there, otherwise it is
/// returned for the caller to print.
pub fn render(
    project_dir: &Path,
    opts: &ResolveOptions,
    template: &Path,
    output: Option<&Path>,
) -> miette::Result<RenderResult> {
    let descriptor = ops_resolve::resolve(project_dir, opts)?;
    let content = std::fs::read_to_string(template).map_err(ConfigError::Io)?;
    let rendered = descriptor.render_manifest(&content)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
            }
            std::fs::write(path, rendered).map_err(ConfigError::Io)?;
            tracing::debug!("wrote {}", path.display());
            Ok(RenderResult::Written(path.to_path_buf()))
        }
        None => Ok(RenderResult::Rendered(rendered)),
    }
}
