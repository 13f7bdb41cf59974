use miette::Result;

use droidconf_core::signing::{DEBUG_SIGNING, RELEASE_BUILD_TYPE};
use droidconf_ops::find_project_root;
use droidconf_ops::ops_resolve::{self, ResolveOptions};
use droidconf_util::errors::ConfigError;
use droidconf_util::progress;

pub fn exec(opts: ResolveOptions, pretty: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
    let project_root = find_project_root(&cwd)?;
    tracing::debug!("project root: {}", project_root.display());

    let descriptor = ops_resolve::resolve(&project_root, &opts)?;
    if descriptor.build_type() == RELEASE_BUILD_TYPE && descriptor.signing_ref() == DEBUG_SIGNING {
        progress::status_warn("Warning", "release build is signed with the debug keys");
    }
    progress::status(
        "Resolved",
        &format!(
            "{} v{} ({})",
            descriptor.application_id(),
            descriptor.version_name(),
            descriptor.build_type()
        ),
    );

    println!("{}", descriptor.to_json(pretty)?);
    Ok(())
}
