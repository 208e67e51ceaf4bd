//! Train command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::CommonArgs;

/// Run the offline training pipeline.
///
/// Downloads the dataset if the raw file is absent, cleans it, fits the
/// regression pipeline, and persists the model and feature-statistics
/// artifacts under the project root.
#[derive(Args, Debug, Clone)]
pub struct TrainCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl TrainCommand {
    /// Executes the command.
    pub fn run(&self) -> Result<()> {
        let settings = self.common.settings()?;
        homestream_train::trainer::run(&settings).context("training run failed")?;
        info!(
            model = %settings.paths.model_file().display(),
            stats = %settings.paths.stats_file().display(),
            "training complete"
        );
        Ok(())
    }
}
