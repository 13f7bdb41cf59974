//! Build types and the signing configuration each one selects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use droidconf_util::errors::{ConfigError, ConfigResult};

use crate::placeholder::ValueSources;

/// The implicit signing configuration backed by the debug keystore.
pub const DEBUG_SIGNING: &str = "debug";

pub const DEBUG_BUILD_TYPE: &str = "debug";
pub const RELEASE_BUILD_TYPE: &str = "release";

/// A named signing credential set from `[signing.<name>]`.
///
/// Every field accepts `${prop:KEY}` and `${env:VAR}` references so the
/// credentials themselves never live in the project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningConfig {
    #[serde(default, rename = "store-file")]
    pub store_file: Option<String>,
    #[serde(default, rename = "key-alias")]
    pub key_alias: Option<String>,
    #[serde(default, rename = "store-password")]
    pub store_password: Option<String>,
    #[serde(default, rename = "key-password")]
    pub key_password: Option<String>,
}

impl SigningConfig {
    /// Check that every credential reference resolves.
    pub fn validate(&self, sources: &ValueSources<'_>) -> ConfigResult<()> {
        for value in [
            &self.store_file,
            &self.key_alias,
            &self.store_password,
            &self.key_password,
        ]
        .into_iter()
        .flatten()
        {
            sources.interpolate(value)?;
        }
        Ok(())
    }
}

/// Per-build-type settings from `[build-types.<name>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildType {
    #[serde(default)]
    pub signing: Option<String>,
    #[serde(default, rename = "application-id-suffix")]
    pub application_id_suffix: Option<String>,
    #[serde(default, rename = "version-name-suffix")]
    pub version_name_suffix: Option<String>,
}

/// Look up a build type. `debug` and `release` always exist, even when
/// not declared.
pub fn build_type<'a>(
    build_types: &'a BTreeMap<String, BuildType>,
    name: &str,
) -> ConfigResult<Option<&'a BuildType>> {
    match build_types.get(name) {
        Some(bt) => Ok(Some(bt)),
        None if name == DEBUG_BUILD_TYPE || name == RELEASE_BUILD_TYPE => Ok(None),
        None => Err(ConfigError::missing(
            format!("build-types.{name}"),
            "Droidconf.toml",
        )),
    }
}

/// Choose the signing reference for a build type.
///
/// A release build with no usable signing configuration falls back to the
/// debug keystore, so a release build stays runnable locally. Any other
/// build type that names an undeclared configuration is an error.
pub fn select_signing(
    signing: &BTreeMap<String, SigningConfig>,
    build_type_name: &str,
    build_type: Option<&BuildType>,
) -> ConfigResult<String> {
    let requested = build_type.and_then(|bt| bt.signing.as_deref());
    match requested {
        Some(name) if name == DEBUG_SIGNING || signing.contains_key(name) => Ok(name.to_string()),
        Some(name) if build_type_name == RELEASE_BUILD_TYPE => {
            tracing::warn!(
                "signing config `{name}` is not declared; signing release with the debug keys"
            );
            Ok(DEBUG_SIGNING.to_string())
        }
        Some(name) => Err(ConfigError::missing(
            format!("signing.{name}"),
            "Droidconf.toml",
        )),
        None => {
            if build_type_name == RELEASE_BUILD_TYPE {
                tracing::warn!("no signing config for release; signing with the debug keys");
            }
            Ok(DEBUG_SIGNING.to_string())
        }
    }
}
