//! Java language levels used for `compileOptions` and the Kotlin JVM target.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use droidconf_util::errors::ConfigError;

/// A Java language level supported by the Android toolchain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum JavaVersion {
    #[serde(rename = "1.8")]
    Java8,
    #[serde(rename = "11")]
    Java11,
    #[default]
    #[serde(rename = "17")]
    Java17,
    #[serde(rename = "21")]
    Java21,
}

impl JavaVersion {
    /// The `jvmTarget` string form (`1.8`, `11`, `17`, `21`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java8 => "1.8",
            Self::Java11 => "11",
            Self::Java17 => "17",
            Self::Java21 => "21",
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JavaVersion {
    type Err = ConfigError;

    /// Accepts plain levels (`17`), legacy dotted levels (`1.8`) and Gradle
    /// constant names (`VERSION_17`, `JavaVersion.VERSION_1_8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix("JavaVersion.").unwrap_or(trimmed);
        let bare = bare.strip_prefix("VERSION_").unwrap_or(bare);
        match bare {
            "8" | "1.8" | "1_8" => Ok(Self::Java8),
            "11" => Ok(Self::Java11),
            "17" => Ok(Self::Java17),
            "21" => Ok(Self::Java21),
            _ => Err(ConfigError::invalid(
                "java-version",
                format!("unsupported Java level `{trimmed}` (expected 1.8, 11, 17 or 21)"),
            )),
        }
    }
}
