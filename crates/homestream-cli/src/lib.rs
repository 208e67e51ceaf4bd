//! Homestream CLI library.
//!
//! This crate provides the command-line interface for homestream:
//!
//! - **Train**: run the offline pipeline (prepare data → fit → save artifacts)
//! - **Simulate**: emit seeded synthetic listings with predictions as JSON lines
//! - **Dashboard**: start the interactive simulate→predict→render loop
//!
//! # Example
//!
//! ```bash
//! # Train and persist artifacts under the project root
//! homestream train --config configs/default.yaml --root .
//!
//! # Print five reproducible events with predictions
//! homestream simulate --count 5 --seed 42
//!
//! # Start the live dashboard
//! homestream dashboard
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{DashboardCommand, SimulateCommand, TrainCommand};

/// Homestream - housing-price training, simulation, and live prediction demo.
#[derive(Parser, Debug)]
#[command(name = "homestream")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the offline training pipeline and persist artifacts
    Train(TrainCommand),

    /// Emit synthetic listing events with predictions as JSON lines
    Simulate(SimulateCommand),

    /// Start the interactive dashboard loop
    Dashboard(DashboardCommand),
}
