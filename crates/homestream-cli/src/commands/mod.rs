//! CLI command implementations.

mod dashboard;
mod simulate;
mod train;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use homestream_core::Settings;

pub use dashboard::DashboardCommand;
pub use simulate::SimulateCommand;
pub use train::TrainCommand;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the YAML configuration file
    #[arg(long, short = 'c', env = "HOMESTREAM_CONFIG", default_value = "configs/default.yaml")]
    pub config: PathBuf,

    /// Project root under which data, models, artifacts, and logs live
    #[arg(long, short = 'r', env = "HOMESTREAM_ROOT", default_value = ".")]
    pub root: PathBuf,
}

impl CommonArgs {
    /// Loads settings from the configured file and root.
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(&self.config, &self.root)
            .with_context(|| format!("loading configuration from {}", self.config.display()))
    }
}
