use std::collections::BTreeMap;

use serde::Serialize;

use droidconf_util::errors::{ConfigError, ConfigResult};

use crate::java::JavaVersion;
use crate::sdk::{SdkBounds, SdkLevel};

/// The fully resolved build configuration handed to the packager.
///
/// Only [`crate::resolver::resolve`] creates descriptors, and they expose
/// no setters, so every instance upholds `min_sdk <= target_sdk <= compile_sdk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    namespace: String,
    application_id: String,
    build_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ndk_version: Option<String>,
    min_sdk: SdkLevel,
    target_sdk: SdkLevel,
    compile_sdk: SdkLevel,
    version_code: u32,
    version_name: String,
    source_compatibility: JavaVersion,
    target_compatibility: JavaVersion,
    jvm_target: JavaVersion,
    manifest_placeholders: BTreeMap<String, String>,
    signing_ref: String,
}

/// Field values collected by the resolver before sealing a descriptor.
pub(crate) struct DescriptorParts {
    pub namespace: String,
    pub application_id: String,
    pub build_type: String,
    pub ndk_version: Option<String>,
    pub bounds: SdkBounds,
    pub version_code: u32,
    pub version_name: String,
    pub source_compatibility: JavaVersion,
    pub target_compatibility: JavaVersion,
    pub jvm_target: JavaVersion,
    pub manifest_placeholders: BTreeMap<String, String>,
    pub signing_ref: String,
}

impl From<DescriptorParts> for BuildDescriptor {
    fn from(parts: DescriptorParts) -> Self {
        Self {
            namespace: parts.namespace,
            application_id: parts.application_id,
            build_type: parts.build_type,
            ndk_version: parts.ndk_version,
            min_sdk: parts.bounds.min(),
            target_sdk: parts.bounds.target(),
            compile_sdk: parts.bounds.compile(),
            version_code: parts.version_code,
            version_name: parts.version_name,
            source_compatibility: parts.source_compatibility,
            target_compatibility: parts.target_compatibility,
            jvm_target: parts.jvm_target,
            manifest_placeholders: parts.manifest_placeholders,
            signing_ref: parts.signing_ref,
        }
    }
}

impl BuildDescriptor {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn ndk_version(&self) -> Option<&str> {
        self.ndk_version.as_deref()
    }

    pub fn min_sdk(&self) -> u32 {
        self.min_sdk.get()
    }

    pub fn target_sdk(&self) -> u32 {
        self.target_sdk.get()
    }

    pub fn compile_sdk(&self) -> u32 {
        self.compile_sdk.get()
    }

    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    pub fn source_compatibility(&self) -> JavaVersion {
        self.source_compatibility
    }

    pub fn target_compatibility(&self) -> JavaVersion {
        self.target_compatibility
    }

    pub fn jvm_target(&self) -> JavaVersion {
        self.jvm_target
    }

    pub fn manifest_placeholders(&self) -> &BTreeMap<String, String> {
        &self.manifest_placeholders
    }

    pub fn signing_ref(&self) -> &str {
        &self.signing_ref
    }

    /// Serialize for the external packager.
    pub fn to_json(&self, pretty: bool) -> ConfigResult<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ConfigError::invalid("descriptor", e.to_string()))
    }

    /// Substitute `${NAME}` tokens in a manifest template.
    ///
    /// Names resolve against the manifest placeholders, plus the built-in
    /// `applicationId`. An unknown name fails, as the platform's manifest
    /// merger does.
    pub fn render_manifest(&self, template: &str) -> ConfigResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let end = start + len;
            let name = &rest[start + 2..end];
            let value = match name {
                "applicationId" => self.application_id.as_str(),
                _ => self
                    .manifest_placeholders
                    .get(name)
                    .map(String::as_str)
                    .ok_or_else(|| ConfigError::missing(name, "manifest placeholders"))?,
            };
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
