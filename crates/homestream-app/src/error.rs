//! Error types for the dashboard front end.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for homestream-app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required artifact is missing; carries an instructional hint.
    #[error("Missing artifact {path}: {hint}")]
    MissingArtifact {
        /// The expected artifact path.
        path: PathBuf,
        /// What the user should do about it.
        hint: String,
    },

    /// An error bubbled up from the core crate.
    #[error(transparent)]
    Core(#[from] homestream_core::CoreError),

    /// An error bubbled up from the predictor.
    #[error(transparent)]
    Predict(#[from] homestream_predict::PredictError),

    /// An I/O operation on a known path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing, or input polling failed.
    #[error("Terminal error: {0}")]
    Terminal(std::io::Error),

    /// Event log serialization failed.
    #[error("Event log serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for homestream-app operations.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
