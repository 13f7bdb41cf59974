use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use droidconf_util::errors::{ConfigError, ConfigResult};

use crate::placeholder::PlaceholderSource;
use crate::sdk::SdkValue;
use crate::signing::{BuildType, SigningConfig};

/// The parsed representation of a `Droidconf.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub android: AndroidConfig,

    #[serde(default, rename = "manifest-placeholders")]
    pub manifest_placeholders: BTreeMap<String, PlaceholderSource>,

    #[serde(default)]
    pub signing: BTreeMap<String, SigningConfig>,

    #[serde(default, rename = "build-types")]
    pub build_types: BTreeMap<String, BuildType>,
}

/// Package identity, SDK window and compiler levels from `[android]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub namespace: String,

    #[serde(default, rename = "application-id")]
    pub application_id: Option<String>,

    #[serde(default, rename = "ndk-version")]
    pub ndk_version: Option<String>,

    #[serde(default, rename = "compile-sdk")]
    pub compile_sdk: Option<SdkValue>,

    #[serde(default, rename = "target-sdk")]
    pub target_sdk: Option<SdkValue>,

    #[serde(default, rename = "min-sdk")]
    pub min_sdk: Option<SdkValue>,

    #[serde(default, rename = "source-compatibility")]
    pub source_compatibility: Option<String>,

    #[serde(default, rename = "target-compatibility")]
    pub target_compatibility: Option<String>,

    #[serde(default, rename = "jvm-target")]
    pub jvm_target: Option<String>,
}

impl ProjectConfig {
    /// Load and parse a `Droidconf.toml` file from the given path.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Project {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `Droidconf.toml` from a string.
    pub fn parse_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Project {
            message: format!("Failed to parse Droidconf.toml: {e}"),
        })
    }
}
