//! Error types for the curator library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for curation operations.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Error reading, writing or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigMissing { path: PathBuf },

    /// A configuration file exists but is not valid JSON of the expected shape.
    #[error("Malformed configuration in '{path}': {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A glob pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CuratorError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CuratorError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for curation operations.
pub type Result<T> = std::result::Result<T, CuratorError>;
