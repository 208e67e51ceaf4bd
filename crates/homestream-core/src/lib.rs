//! Core configuration and shared types for homestream.
//!
//! This crate provides the foundational pieces used by every other crate in
//! the workspace:
//!
//! - **Settings**: YAML-backed configuration resolved once at startup, with
//!   all filesystem paths derived from an explicit project root.
//! - **Feature statistics**: the versioned artifact schema linking the
//!   trainer to the simulator and predictor.
//! - **Error types**: structured error handling with path context.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use homestream_core::Settings;
//!
//! let settings = Settings::load(
//!     Path::new("configs/default.yaml"),
//!     Path::new("."),
//! )?;
//! println!("training target: {}", settings.training.target);
//! # Ok::<(), homestream_core::CoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod stats;

pub use config::{AppConfig, Paths, Settings, SimulatorConfig, TrainingConfig};
pub use error::{CoreError, Result};
pub use stats::{FeatureKind, FeatureStats, FeatureSummary, STATS_SCHEMA_VERSION};
