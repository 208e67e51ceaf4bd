//! Simulate command implementation.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::json;

use homestream_core::stats::FeatureStats;
use homestream_predict::{load_model, predict_price};
use homestream_sim::iter_events;

use super::CommonArgs;

/// Emit synthetic listing events with predictions, one JSON line each.
///
/// Useful for scripting and smoke tests; with `--seed` the emitted feature
/// values are reproducible.
#[derive(Args, Debug, Clone)]
pub struct SimulateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of events to emit
    #[arg(long, short = 'n', default_value = "5")]
    pub count: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulateCommand {
    /// Executes the command.
    pub fn run(&self) -> Result<()> {
        let settings = self.common.settings()?;

        let stats_path = settings.paths.stats_file();
        if !stats_path.exists() {
            bail!(
                "feature statistics not found at {}; run `homestream train` first",
                stats_path.display()
            );
        }
        let stats = FeatureStats::load(&stats_path).context("loading feature statistics")?;
        let model =
            load_model(&settings.paths.model_file()).context("loading model artifact")?;

        for event in iter_events(&stats, self.count, self.seed) {
            let prediction = predict_price(&model, &event.payload)?;
            let line = json!({
                "created_at": event.created_at.to_rfc3339(),
                "payload": event.payload,
                "prediction": prediction,
            });
            println!("{line}");
        }
        Ok(())
    }
}
