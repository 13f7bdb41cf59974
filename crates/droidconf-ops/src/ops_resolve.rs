//! Operation: resolve a project on disk into a build descriptor.
//!
//! Reads `Droidconf.toml` and the local properties file once each, then
//! hands everything to [`droidconf_core::resolver::resolve`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use droidconf_core::descriptor::BuildDescriptor;
use droidconf_core::project::ProjectConfig;
use droidconf_core::properties::Properties;
use droidconf_core::resolver::{self, ResolveInputs};
use droidconf_core::signing::DEBUG_BUILD_TYPE;
use droidconf_core::PROJECT_FILE;

/// Options for a resolve invocation.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub build_type: String,
    /// Properties file override; relative paths are taken from the project root.
    pub properties: Option<PathBuf>,
    /// Environment snapshot captured by the caller.
    pub env: BTreeMap<String, String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            build_type: DEBUG_BUILD_TYPE.to_string(),
            properties: None,
            env: BTreeMap::new(),
        }
    }
}

pub fn resolve(project_dir: &Path, opts: &ResolveOptions) -> miette::Result<BuildDescriptor> {
    let project = ProjectConfig::from_path(&project_dir.join(PROJECT_FILE))?;
    let props_path = crate::properties_path(project_dir, opts.properties.as_deref());
    let properties = Properties::load(&props_path)?;

    let inputs = ResolveInputs::from_properties(properties)?
        .with_build_type(opts.build_type.clone())
        .with_env(opts.env.clone());

    let descriptor = resolver::resolve(&project, inputs)?;
    tracing::info!(
        "resolved {} ({}) min={} target={} compile={}",
        descriptor.application_id(),
        descriptor.build_type(),
        descriptor.min_sdk(),
        descriptor.target_sdk(),
        descriptor.compile_sdk()
    );
    Ok(descriptor)
}
