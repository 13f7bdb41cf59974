//! Android API levels and the min/target/compile window.

use std::fmt;

use serde::{Deserialize, Serialize};

use droidconf_util::errors::{ConfigError, ConfigResult};

/// Lowest API level accepted anywhere in a build.
pub const MIN_API_LEVEL: u32 = 1;

/// Highest API level the platform currently ships.
pub const MAX_API_LEVEL: u32 = 36;

/// An SDK level as written in `Droidconf.toml`: a TOML integer, a string,
/// or any other TOML value. Every shape deserializes so that a bad value
/// surfaces as [`ConfigError::InvalidValue`] instead of a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SdkValue {
    Number(i64),
    Text(String),
    Other(toml::Value),
}

/// A validated Android API level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SdkLevel(u32);

impl SdkLevel {
    /// Levels compiled into droidconf itself, known to be in range.
    pub(crate) const fn builtin(level: u32) -> Self {
        Self(level)
    }

    /// Parse a raw string level for `key`.
    pub fn parse(key: &str, raw: &str) -> ConfigResult<Self> {
        let trimmed = raw.trim();
        let level: i64 = trimmed.parse().map_err(|_| {
            ConfigError::invalid(key, format!("expected an API level, got `{trimmed}`"))
        })?;
        Self::from_number(key, level)
    }

    /// Validate a numeric level for `key`.
    pub fn from_number(key: &str, level: i64) -> ConfigResult<Self> {
        if level < i64::from(MIN_API_LEVEL) || level > i64::from(MAX_API_LEVEL) {
            return Err(ConfigError::invalid(
                key,
                format!(
                    "API level {level} is outside the supported range {MIN_API_LEVEL}..={MAX_API_LEVEL}"
                ),
            ));
        }
        Ok(Self(level as u32))
    }

    pub fn from_value(key: &str, value: &SdkValue) -> ConfigResult<Self> {
        match value {
            SdkValue::Number(n) => Self::from_number(key, *n),
            SdkValue::Text(s) => Self::parse(key, s),
            SdkValue::Other(other) => Err(ConfigError::invalid(
                key,
                format!("expected an API level, got a {}", other.type_str()),
            )),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SdkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The platform compatibility window of a build.
///
/// Construction guarantees `min <= target <= compile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdkBounds {
    min: SdkLevel,
    target: SdkLevel,
    compile: SdkLevel,
}

impl SdkBounds {
    pub fn new(min: SdkLevel, target: SdkLevel, compile: SdkLevel) -> ConfigResult<Self> {
        if min > target {
            return Err(ConfigError::invalid(
                "min-sdk",
                format!("min-sdk {min} is greater than target-sdk {target}"),
            ));
        }
        if target > compile {
            return Err(ConfigError::invalid(
                "target-sdk",
                format!("target-sdk {target} is greater than compile-sdk {compile}"),
            ));
        }
        Ok(Self {
            min,
            target,
            compile,
        })
    }

    pub fn min(&self) -> SdkLevel {
        self.min
    }

    pub fn target(&self) -> SdkLevel {
        self.target
    }

    pub fn compile(&self) -> SdkLevel {
        self.compile
    }
}
