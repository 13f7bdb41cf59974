use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Every way resolving a build configuration can fail.
///
/// All variants are fatal: configuration must be complete before the
/// external compiler or packager runs, so nothing is retried locally.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The properties file is absent and `key` has no fallback.
    #[error("Properties file not found: {} (required for `{key}`)", path.display())]
    #[diagnostic(help("Create the properties file or declare a default for the key"))]
    FileNotFound { path: PathBuf, key: String },

    /// A value was present but could not be accepted.
    #[error("Invalid value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },

    /// A referenced key is absent from its source and has no fallback.
    #[error("Missing required key `{key}` in {origin}")]
    #[diagnostic(help("Add the key or declare a default for it"))]
    MissingRequiredKey { key: String, origin: String },

    /// Invalid or malformed project file (`Droidconf.toml`).
    #[error("Project file error: {message}")]
    #[diagnostic(help("Check your Droidconf.toml for syntax errors"))]
    Project { message: String },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Shorthand for [`ConfigError::MissingRequiredKey`].
    pub fn missing(key: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::MissingRequiredKey {
            key: key.into(),
            origin: origin.into(),
        }
    }
}

/// Result alias used by the resolution layer.
pub type ConfigResult<T> = Result<T, ConfigError>;
