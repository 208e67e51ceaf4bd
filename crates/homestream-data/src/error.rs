//! Error types for dataset download and preprocessing.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for homestream-data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// An I/O operation on a known path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset download failed.
    #[error("Download from {url} failed: {source}")]
    Download {
        /// The URL being fetched.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The remote returned a non-success status.
    #[error("Download from {url} failed with HTTP status {status}")]
    HttpStatus {
        /// The URL being fetched.
        url: String,
        /// The status code returned.
        status: u16,
    },

    /// A required column was not present in the file header.
    #[error("Column `{column}` not found in {path}")]
    MissingColumn {
        /// The missing column name.
        column: String,
        /// The file whose header was inspected.
        path: PathBuf,
    },

    /// A value in a processed file could not be parsed as a number.
    #[error("Unparsable value `{value}` for column `{column}` in {path}")]
    BadValue {
        /// The offending raw value.
        value: String,
        /// The column it appeared in.
        column: String,
        /// The file being read.
        path: PathBuf,
    },

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized Result type for homestream-data operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}
