//! Resolution of a project file plus local inputs into a [`BuildDescriptor`].

use std::collections::BTreeMap;

use droidconf_util::errors::{ConfigError, ConfigResult};

use crate::defaults::FrameworkDefaults;
use crate::descriptor::{BuildDescriptor, DescriptorParts};
use crate::java::JavaVersion;
use crate::placeholder::ValueSources;
use crate::project::{AndroidConfig, ProjectConfig};
use crate::properties::Properties;
use crate::sdk::{SdkBounds, SdkLevel, SdkValue};
use crate::signing::{self, DEBUG_BUILD_TYPE};

/// Everything a single resolution reads besides the project file.
#[derive(Debug, Clone)]
pub struct ResolveInputs {
    pub properties: Properties,
    pub defaults: FrameworkDefaults,
    /// Snapshot of the environment, consulted by `env` placeholder sources.
    pub env: BTreeMap<String, String>,
    pub build_type: String,
}

impl ResolveInputs {
    /// Inputs for a `debug` build, with framework defaults taken from
    /// `properties` and an empty environment.
    pub fn from_properties(properties: Properties) -> ConfigResult<Self> {
        let defaults = FrameworkDefaults::from_properties(&properties)?;
        Ok(Self {
            properties,
            defaults,
            env: BTreeMap::new(),
            build_type: DEBUG_BUILD_TYPE.to_string(),
        })
    }

    pub fn with_build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = build_type.into();
        self
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }
}

/// Resolve `project` against `inputs`.
///
/// Precedence for SDK levels is project file, then framework defaults.
/// Any failure aborts the whole resolution.
pub fn resolve(project: &ProjectConfig, inputs: ResolveInputs) -> ConfigResult<BuildDescriptor> {
    let android = &project.android;
    let defaults = &inputs.defaults;
    tracing::debug!(
        "resolving {} for build type `{}`",
        android.namespace,
        inputs.build_type
    );

    let build_type = signing::build_type(&project.build_types, &inputs.build_type)?;

    let bounds = SdkBounds::new(
        sdk_or("min-sdk", android.min_sdk.as_ref(), defaults.min_sdk)?,
        sdk_or("target-sdk", android.target_sdk.as_ref(), defaults.target_sdk)?,
        sdk_or("compile-sdk", android.compile_sdk.as_ref(), defaults.compile_sdk)?,
    )?;
    tracing::debug!(
        "sdk window min={} target={} compile={}",
        bounds.min(),
        bounds.target(),
        bounds.compile()
    );

    let (source_compatibility, target_compatibility, jvm_target) = java_levels(android)?;

    validate_package_name("namespace", &android.namespace)?;
    let mut application_id = android
        .application_id
        .clone()
        .unwrap_or_else(|| android.namespace.clone());
    let mut version_name = defaults.version_name.clone();
    if let Some(bt) = build_type {
        if let Some(suffix) = &bt.application_id_suffix {
            application_id.push_str(suffix);
        }
        if let Some(suffix) = &bt.version_name_suffix {
            version_name.push_str(suffix);
        }
    }
    validate_package_name("application-id", &application_id)?;

    let sources = ValueSources::new(&inputs.properties, &inputs.env);
    let mut manifest_placeholders = BTreeMap::new();
    for (name, source) in &project.manifest_placeholders {
        let value = source.resolve(&sources)?;
        tracing::debug!("placeholder {name} resolved");
        manifest_placeholders.insert(name.clone(), value);
    }

    let signing_ref = signing::select_signing(&project.signing, &inputs.build_type, build_type)?;
    if let Some(config) = project.signing.get(&signing_ref) {
        config.validate(&sources)?;
    }

    let ndk_version = android
        .ndk_version
        .clone()
        .or_else(|| defaults.ndk_version.clone());

    Ok(DescriptorParts {
        namespace: android.namespace.clone(),
        application_id,
        build_type: inputs.build_type.clone(),
        ndk_version,
        bounds,
        version_code: defaults.version_code,
        version_name,
        source_compatibility,
        target_compatibility,
        jvm_target,
        manifest_placeholders,
        signing_ref,
    }
    .into())
}

fn sdk_or(key: &str, declared: Option<&SdkValue>, default: SdkLevel) -> ConfigResult<SdkLevel> {
    declared.map_or(Ok(default), |value| SdkLevel::from_value(key, value))
}

fn java_levels(android: &AndroidConfig) -> ConfigResult<(JavaVersion, JavaVersion, JavaVersion)> {
    let parse = |key: &str, raw: Option<&String>| -> ConfigResult<Option<JavaVersion>> {
        raw.map(|s| {
            s.parse::<JavaVersion>().map_err(|e| match e {
                ConfigError::InvalidValue { message, .. } => ConfigError::invalid(key, message),
                other => other,
            })
        })
        .transpose()
    };
    let source = parse("source-compatibility", android.source_compatibility.as_ref())?
        .unwrap_or_default();
    let target = parse("target-compatibility", android.target_compatibility.as_ref())?
        .unwrap_or_default();
    let jvm_target = parse("jvm-target", android.jvm_target.as_ref())?.unwrap_or(target);
    if source > target {
        return Err(ConfigError::invalid(
            "source-compatibility",
            format!("source level {source} is newer than target level {target}"),
        ));
    }
    Ok((source, target, jvm_target))
}

/// Android package names: two or more dot-separated segments, each starting
/// with a letter and containing only letters, digits and underscores.
fn validate_package_name(key: &str, name: &str) -> ConfigResult<()> {
    let segments: Vec<&str> = name.split('.').collect();
    let well_formed = segments.len() >= 2
        && segments.iter().all(|seg| {
            let mut chars = seg.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            key,
            format!("`{name}` is not a valid Android package name"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_names() {
        assert!(validate_package_name("k", "com.example.flutter_bloc_rxdart").is_ok());
        assert!(validate_package_name("k", "com.example.app.debug").is_ok());
        assert!(validate_package_name("k", "single").is_err());
        assert!(validate_package_name("k", "com.1example").is_err());
        assert!(validate_package_name("k", "com..example").is_err());
        assert!(validate_package_name("k", "com.exa-mple").is_err());
    }
}
