//! Error types for the training pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for homestream-train operations.
#[derive(Debug, Error)]
pub enum TrainError {
    /// An error bubbled up from the core crate (config, stats schema).
    #[error(transparent)]
    Core(#[from] homestream_core::CoreError),

    /// An error bubbled up from the data crate (download, preprocessing).
    #[error(transparent)]
    Data(#[from] homestream_data::DataError),

    /// The cleaned table has too few rows to split and fit.
    #[error("Not enough rows to train: got {rows}, need at least {min}")]
    TooFewRows {
        /// Rows available after cleaning.
        rows: usize,
        /// Minimum required.
        min: usize,
    },

    /// The normal-equations system could not be solved.
    #[error("Singular design matrix: {message}")]
    SingularMatrix {
        /// A description of where elimination broke down.
        message: String,
    },

    /// An inference-time feature mapping did not match the training set.
    #[error("Feature mismatch: missing {missing:?}, unexpected {unexpected:?}")]
    FeatureMismatch {
        /// Training features absent from the input.
        missing: Vec<String>,
        /// Input keys the model was not trained on.
        unexpected: Vec<String>,
    },

    /// Model artifact serialization failed.
    #[error("Model serialization error for {path}: {message}")]
    ModelSerialization {
        /// The artifact path being written or read.
        path: PathBuf,
        /// A description of the underlying failure.
        message: String,
    },

    /// An I/O operation on a known path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for homestream-train operations.
pub type Result<T> = std::result::Result<T, TrainError>;
