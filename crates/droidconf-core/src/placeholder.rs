//! Manifest placeholder sources and the lookups that evaluate them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use droidconf_util::errors::{ConfigError, ConfigResult};

use crate::properties::Properties;

/// Where a manifest placeholder (or any interpolated string) gets its value.
///
/// Written in `Droidconf.toml` as one of:
///
/// ```toml
/// [manifest-placeholders]
/// appLabel = "Maps ${prop:flavor.name}"
/// GOOGLE_MAP_API_KEY = { property = "GOOGLE_MAP_API_KEY" }
/// SENTRY_DSN = { env = "SENTRY_DSN", default = "" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderSource {
    Literal(String),
    Property {
        property: String,
        #[serde(default)]
        default: Option<String>,
    },
    Env {
        env: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl PlaceholderSource {
    pub fn resolve(&self, sources: &ValueSources<'_>) -> ConfigResult<String> {
        match self {
            Self::Literal(text) => sources.interpolate(text),
            Self::Property { property, default } => {
                sources.property_or(property, default.as_deref())
            }
            Self::Env { env, default } => sources.env_or(env, default.as_deref()),
        }
    }
}

/// Read-only view over the secret-bearing inputs of one resolution: the
/// local properties and a snapshot of the environment.
#[derive(Debug, Clone, Copy)]
pub struct ValueSources<'a> {
    properties: &'a Properties,
    env: &'a BTreeMap<String, String>,
}

impl<'a> ValueSources<'a> {
    pub fn new(properties: &'a Properties, env: &'a BTreeMap<String, String>) -> Self {
        Self { properties, env }
    }

    pub fn property_or(&self, key: &str, default: Option<&str>) -> ConfigResult<String> {
        match (self.properties.get(key), default) {
            (Some(value), _) => Ok(value.to_string()),
            (None, Some(fallback)) => Ok(fallback.to_string()),
            (None, None) => self.properties.require(key).map(str::to_string),
        }
    }

    pub fn env_or(&self, var: &str, default: Option<&str>) -> ConfigResult<String> {
        match (self.env.get(var), default) {
            (Some(value), _) => Ok(value.clone()),
            (None, Some(fallback)) => Ok(fallback.to_string()),
            (None, None) => Err(ConfigError::missing(var, "environment")),
        }
    }

    /// Replace `${prop:KEY}` and `${env:VAR}` references in `input`.
    ///
    /// Unlike manifest placeholders, a reference here has no fallback, so an
    /// unresolved one is an error. Other `${...}` tokens are left untouched
    /// so they can still be substituted at manifest render time.
    pub fn interpolate(&self, input: &str) -> ConfigResult<String> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let end = start + len;
            out.push_str(&rest[..start]);
            match rest[start + 2..end].split_once(':') {
                Some(("prop", key)) => out.push_str(&self.property_or(key, None)?),
                Some(("env", var)) => out.push_str(&self.env_or(var, None)?),
                _ => out.push_str(&rest[start..=end]),
            }
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
