//! Error types for configuration loading and validation.

use std::path::PathBuf;

use crate::format::ConfigFormat;

/// A configuration node violates its expected shape.
///
/// Carries the path of the offending node (e.g. `sidebar[1].items[2]`) so the
/// author can locate it in the configuration file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct SchemaError {
    path: String,
    message: String,
}

impl SchemaError {
    /// Create a schema error for the node at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path of the offending node.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Human-readable description of the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// File extension does not map to a known format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Syntax error in the configuration file.
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format the content was parsed as.
        format: ConfigFormat,
        /// Parser message.
        message: String,
    },
    /// Failed to serialize a configuration.
    #[error("{format} serialization error: {message}")]
    Serialize {
        /// Target format.
        format: ConfigFormat,
        /// Serializer message.
        message: String,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path, e.g. `edit_link.base_url`.
        field: String,
        /// Error message, e.g. `${DOCS_REPO} not set`.
        message: String,
    },
    /// Schema violation.
    #[error("Configuration error: {0}")]
    Schema(#[from] SchemaError),
}
