//! Error types for library operations.
//!
//! Validation findings are data, not errors: a library full of broken front
//! matter still validates successfully and produces a report. `CuratorError`
//! covers the cases where an operation itself cannot proceed.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for library operations.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Configuration loading or interpretation failed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path or identifier did not resolve to anything known.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid caller input: names, patterns, command arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serializing output to a requested format failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The watch runtime failed to start or observe the library.
    #[error("Watch error: {0}")]
    WatchError(String),
}

impl CuratorError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CuratorError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
