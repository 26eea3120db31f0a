//! Keystone CLI - Command-line interface for portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Project an investment at the target rate
//! keystone project --principal 100000 --years 5
//!
//! # Per-property return metrics
//! keystone metrics --data properties.csv
//!
//! # Portfolio summary as JSON
//! keystone --format json summary
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Project(args) => commands::project::execute(args, format)?,
        Commands::Metrics(args) => commands::metrics::execute(args, format)?,
        Commands::Summary(args) => commands::summary::execute(args, format)?,
    }

    Ok(())
}
