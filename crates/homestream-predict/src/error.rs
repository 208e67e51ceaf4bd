//! Error types for model loading and inference.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for homestream-predict operations.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The model artifact could not be read.
    #[error("Cannot read model artifact {path}: {source}")]
    Io {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The artifact bytes did not decode as a model envelope.
    #[error("Corrupt model artifact {path}: {message}")]
    Corrupt {
        /// The artifact path.
        path: PathBuf,
        /// A description of the decode failure.
        message: String,
    },

    /// The artifact was written by an incompatible format version.
    #[error("Model format version mismatch in {path}: expected {expected}, found {found}")]
    FormatVersion {
        /// The artifact path.
        path: PathBuf,
        /// The version this build understands.
        expected: u32,
        /// The version found in the file.
        found: u32,
    },

    /// Inference failed (e.g. feature-set mismatch).
    #[error(transparent)]
    Inference(#[from] homestream_train::TrainError),
}

/// A specialized Result type for homestream-predict operations.
pub type Result<T> = std::result::Result<T, PredictError>;
