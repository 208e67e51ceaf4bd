//! Offline training pipeline for homestream.
//!
//! This crate turns the cleaned housing table into two persisted artifacts:
//!
//! - a fitted [`Pipeline`] (standardization + ordinary least squares),
//!   serialized as a versioned bincode [`ModelEnvelope`];
//! - a [`FeatureStats`](homestream_core::FeatureStats) record consumed by
//!   the event simulator.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use homestream_core::Settings;
//!
//! let settings = Settings::load(Path::new("configs/default.yaml"), Path::new("."))?;
//! homestream_train::trainer::run(&settings)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod pipeline;
pub mod regression;
pub mod scaler;
pub mod split;
pub mod stats;
pub mod trainer;

pub use error::{Result, TrainError};
pub use pipeline::{ModelEnvelope, Pipeline, MODEL_FORMAT_VERSION};
pub use regression::LinearRegression;
pub use scaler::StandardScaler;
pub use split::{train_test_split, Split};
pub use stats::compute_feature_stats;
pub use trainer::{prepare_data, save_artifacts, train_model, Evaluation};
