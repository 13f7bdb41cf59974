use std::path::Path;

use miette::Result;

use droidconf_ops::find_project_root;
use droidconf_ops::ops_render::{self, RenderResult};
use droidconf_ops::ops_resolve::ResolveOptions;
use droidconf_util::errors::ConfigError;
use droidconf_util::progress;

pub fn exec(opts: ResolveOptions, template: &Path, output: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
    let project_root = find_project_root(&cwd)?;
    tracing::debug!("project root: {}", project_root.display());
    let template = cwd.join(template);
    let output = output.map(|p| cwd.join(p));

    match ops_render::render(&project_root, &opts, &template, output.as_deref())? {
        RenderResult::Written(path) => {
            progress::status("Rendered", &path.display().to_string());
        }
        RenderResult::Rendered(content) => print!("{content}"),
    }
    Ok(())
}
