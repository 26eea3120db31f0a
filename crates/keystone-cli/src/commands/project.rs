//! Project command implementation.
//!
//! Compound growth of a single investment at a fixed annual rate.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::Tabled;

use keystone_analytics::format::{format_currency, format_multiple, format_percent};
use keystone_analytics::projection::{
    project, ProjectionBounds, ProjectionInput, ProjectionResult, ProjectionYear,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output, print_warning, KeyValue};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Amount invested
    #[arg(short, long)]
    pub principal: Decimal,

    /// Horizon in whole years
    #[arg(short, long)]
    pub years: u32,

    /// Annual growth rate (as percentage, e.g., 30 for 30%)
    #[arg(short, long, default_value = "30", allow_negative_numbers = true)]
    pub rate: Decimal,

    /// Show the year-by-year balance
    #[arg(long)]
    pub schedule: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionOutput<'a> {
    #[serde(flatten)]
    result: &'a ProjectionResult,
    schedule: Vec<ProjectionYear>,
}

#[derive(Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Gain")]
    gain: String,
}

/// Execute the project command.
pub fn execute(args: ProjectArgs, format: OutputFormat) -> Result<()> {
    let input = ProjectionInput::new(args.principal, args.rate / dec!(100), args.years);

    // Advisory outside the server.
    if let Err(e) = ProjectionBounds::default().check(&input) {
        print_warning(&e.to_string());
    }

    let result = project(&input).map_err(CliError::from)?;

    match format {
        OutputFormat::Json => {
            print_json(&ProjectionOutput {
                result: &result,
                schedule: result.schedule(),
            })?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Principal", format_currency(input.principal)),
                KeyValue::new("Annual Rate", format_percent(args.rate, 1)),
                KeyValue::new("Years", input.years.to_string()),
                KeyValue::new("Final Value", format_currency(result.final_value)),
                KeyValue::new("Total Returns", format_currency(result.total_returns)),
                KeyValue::new("Return Multiple", format_multiple(result.return_multiple, 3)),
                KeyValue::new(
                    "Average Annual Gain",
                    format_currency(result.average_annual_gain),
                ),
            ];

            if format == OutputFormat::Table {
                print_header("Investment Projection");
            }
            print_output(&rows, format)?;

            if args.schedule && format == OutputFormat::Table {
                let schedule: Vec<ScheduleRow> = result
                    .schedule()
                    .into_iter()
                    .map(|y| ScheduleRow {
                        year: y.year,
                        balance: format_currency(y.balance),
                        gain: format_currency(y.gain),
                    })
                    .collect();
                print_header("Schedule");
                print_output(&schedule, format)?;
            }
        }
    }

    Ok(())
}
