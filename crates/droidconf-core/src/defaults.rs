//! Values supplied by the cross-platform framework rather than the project.

use crate::properties::Properties;
use crate::sdk::SdkLevel;

use droidconf_util::errors::{ConfigError, ConfigResult};

pub const DEFAULT_COMPILE_SDK: u32 = 35;
pub const DEFAULT_TARGET_SDK: u32 = 35;
pub const DEFAULT_MIN_SDK: u32 = 21;
pub const DEFAULT_VERSION_CODE: u32 = 1;
pub const DEFAULT_VERSION_NAME: &str = "1.0";

pub const VERSION_CODE_KEY: &str = "flutter.versionCode";
pub const VERSION_NAME_KEY: &str = "flutter.versionName";
pub const COMPILE_SDK_KEY: &str = "flutter.compileSdkVersion";
pub const TARGET_SDK_KEY: &str = "flutter.targetSdkVersion";
pub const MIN_SDK_KEY: &str = "flutter.minSdkVersion";
pub const NDK_VERSION_KEY: &str = "flutter.ndkVersion";

/// Framework-provided defaults for SDK levels and app versioning.
///
/// The project file may override any SDK level; version code and name
/// always come from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkDefaults {
    pub compile_sdk: SdkLevel,
    pub target_sdk: SdkLevel,
    pub min_sdk: SdkLevel,
    pub ndk_version: Option<String>,
    pub version_code: u32,
    pub version_name: String,
}

impl Default for FrameworkDefaults {
    fn default() -> Self {
        Self {
            compile_sdk: builtin(DEFAULT_COMPILE_SDK),
            target_sdk: builtin(DEFAULT_TARGET_SDK),
            min_sdk: builtin(DEFAULT_MIN_SDK),
            ndk_version: None,
            version_code: DEFAULT_VERSION_CODE,
            version_name: DEFAULT_VERSION_NAME.to_string(),
        }
    }
}

fn builtin(level: u32) -> SdkLevel {
    SdkLevel::builtin(level)
}

impl FrameworkDefaults {
    /// Layer the framework keys found in `props` over the built-in values.
    ///
    /// Every key is optional. Present keys must be valid: non-numeric SDK
    /// levels or version codes fail with [`ConfigError::InvalidValue`].
    pub fn from_properties(props: &Properties) -> ConfigResult<Self> {
        let mut defaults = Self::default();
        if let Some(raw) = props.get(COMPILE_SDK_KEY) {
            defaults.compile_sdk = SdkLevel::parse(COMPILE_SDK_KEY, raw)?;
        }
        if let Some(raw) = props.get(TARGET_SDK_KEY) {
            defaults.target_sdk = SdkLevel::parse(TARGET_SDK_KEY, raw)?;
        }
        if let Some(raw) = props.get(MIN_SDK_KEY) {
            defaults.min_sdk = SdkLevel::parse(MIN_SDK_KEY, raw)?;
        }
        if let Some(raw) = props.get(NDK_VERSION_KEY) {
            defaults.ndk_version = Some(raw.trim().to_string());
        }
        if let Some(raw) = props.get(VERSION_CODE_KEY) {
            defaults.version_code = parse_version_code(raw)?;
        }
        if let Some(raw) = props.get(VERSION_NAME_KEY) {
            let name = raw.trim();
            if name.is_empty() {
                return Err(ConfigError::invalid(VERSION_NAME_KEY, "must not be empty"));
            }
            defaults.version_name = name.to_string();
        }
        Ok(defaults)
    }
}

fn parse_version_code(raw: &str) -> ConfigResult<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(code) if code >= 1 => Ok(code),
        _ => Err(ConfigError::invalid(
            VERSION_CODE_KEY,
            format!("expected a positive integer, got `{trimmed}`"),
        )),
    }
}
