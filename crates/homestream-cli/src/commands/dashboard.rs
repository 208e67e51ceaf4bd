//! Dashboard command implementation.

use anyhow::{Context, Result};
use clap::Args;

use homestream_app::{run_dashboard, DashboardOptions};

use super::CommonArgs;

/// Start the interactive simulate→predict→render loop.
#[derive(Args, Debug, Clone)]
pub struct DashboardCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Log batches to the console instead of drawing a TUI
    #[arg(long)]
    pub headless: bool,

    /// Seed for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many batches instead of running forever
    #[arg(long)]
    pub max_batches: Option<usize>,
}

impl DashboardCommand {
    /// Executes the command.
    pub fn run(&self) -> Result<()> {
        let settings = self.common.settings()?;
        let options = DashboardOptions {
            headless: self.headless,
            seed: self.seed,
            max_batches: self.max_batches,
        };
        run_dashboard(&settings, &options).context("dashboard session failed")
    }
}
