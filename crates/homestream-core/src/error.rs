//! Error types for the homestream core library.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for homestream-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An I/O operation on a known path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed or failed validation.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// The configuration file that was being loaded.
        path: PathBuf,
        /// A description of what was wrong.
        message: String,
    },

    /// A persisted artifact carried an unexpected schema version.
    #[error("Schema version mismatch in {path}: expected {expected}, found {found}")]
    SchemaVersion {
        /// The artifact file that was being loaded.
        path: PathBuf,
        /// The version this build understands.
        expected: u32,
        /// The version found in the file.
        found: u32,
    },

    /// A feature summary violated its ordering or finiteness invariants.
    #[error("Invalid statistics for feature `{feature}`: {message}")]
    InvalidStats {
        /// The feature whose summary is invalid.
        feature: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for homestream-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a configuration error for the given file.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CoreError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::config("/tmp/default.yaml", "missing `training` section");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/default.yaml: missing `training` section"
        );

        let err = CoreError::SchemaVersion {
            path: PathBuf::from("stats.json"),
            expected: 1,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Schema version mismatch in stats.json: expected 1, found 2"
        );
    }
}
