//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{MetricsArgs, ProjectArgs, SummaryArgs};

/// Keystone - Real-estate portfolio analytics CLI
#[derive(Parser)]
#[command(name = "keystone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Project compound growth of an investment
    Project(ProjectArgs),

    /// Show return metrics for every property
    Metrics(MetricsArgs),

    /// Show the portfolio summary
    Summary(SummaryArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
