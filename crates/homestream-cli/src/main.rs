//! Homestream CLI - train, simulate, and watch live price predictions.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use homestream_cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => cmd.run()?,
        Commands::Simulate(cmd) => cmd.run()?,
        Commands::Dashboard(cmd) => cmd.run()?,
    }

    info!("homestream completed successfully");
    Ok(())
}
