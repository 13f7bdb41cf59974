//! Core types for droidconf.
//!
//! This crate turns the declarative Android build configuration of a
//! cross-platform app into a validated [`descriptor::BuildDescriptor`]:
//! local properties, the `Droidconf.toml` project file, framework defaults,
//! SDK bounds, Java compatibility levels, manifest placeholders, signing
//! selection, and the resolver that ties them together.
//!
//! This crate never reads process-global state; every input is passed in
//! explicitly through [`resolver::ResolveInputs`].

/// Name of the project file located at the Android project root.
pub const PROJECT_FILE: &str = "Droidconf.toml";

/// Name of the untracked local properties file.
pub const LOCAL_PROPERTIES: &str = "local.properties";

pub mod defaults;
pub mod descriptor;
pub mod java;
pub mod placeholder;
pub mod project;
pub mod properties;
pub mod resolver;
pub mod sdk;
pub mod signing;
