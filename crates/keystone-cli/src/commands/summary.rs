//! Summary command implementation.
//!
//! Firm-level totals, current holdings, exits and the state breakdown.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use keystone_analytics::format::{
    format_currency_compact, format_multiple, format_percent, NOT_AVAILABLE,
};
use keystone_portfolio::{
    bucket_by_state, calculate_portfolio_summary, AggregationConfig, Average,
    CurrentHoldingsSummary, ExitSummary, PortfolioSummary, StateBucket,
};

use crate::cli::OutputFormat;
use crate::commands::load_records;
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Property file (.json or .csv). Defaults to the built-in dataset.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Also show the breakdown by state
    #[arg(long)]
    pub by_state: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryOutput {
    summary: PortfolioSummary,
    equity_created_pct: Option<Decimal>,
    current_holdings: CurrentHoldingsSummary,
    exits: ExitSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    states: Option<Vec<StateBucket>>,
}

#[derive(Serialize, Tabled)]
struct StateRow {
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Properties")]
    properties: usize,
    #[tabled(rename = "Held")]
    held: usize,
    #[tabled(rename = "Units")]
    units: u64,
    #[tabled(rename = "Exit Value")]
    exit_value: String,
}

fn average(avg: &Average, f: impl FnOnce(Decimal) -> String) -> String {
    avg.value_if_any()
        .map_or_else(|| NOT_AVAILABLE.to_string(), f)
}

fn money(value: Decimal) -> String {
    format_currency_compact(value, 2)
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, format: OutputFormat) -> Result<()> {
    let records = load_records(args.data.as_deref())?;

    let summary = calculate_portfolio_summary(&records, &AggregationConfig::default());
    let holdings = CurrentHoldingsSummary::calculate(&records);
    let exits = ExitSummary::calculate(&records);
    let states = args.by_state.then(|| bucket_by_state(&records));

    if format == OutputFormat::Json {
        print_json(&SummaryOutput {
            equity_created_pct: summary.equity_created_pct(),
            summary,
            current_holdings: holdings,
            exits,
            states,
        })?;
        return Ok(());
    }

    let rows = vec![
        KeyValue::new(
            "Properties",
            format!(
                "{} ({} current, {} sold)",
                summary.property_count, summary.current_count, summary.sold_count
            ),
        ),
        KeyValue::new("Total Portfolio Value", money(summary.total_portfolio_value)),
        KeyValue::new("Total Units", summary.total_units.to_string()),
        KeyValue::new("Equity Created", money(summary.total_equity_created)),
        KeyValue::new(
            "Equity Created %",
            summary
                .equity_created_pct()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_percent(v, 1)),
        ),
        KeyValue::new(
            "Average Return",
            average(&summary.avg_return, |v| format_percent(v, 1)),
        ),
        KeyValue::new(
            "Average Equity Multiple",
            average(&summary.avg_equity_multiple, |v| format_multiple(v, 2)),
        ),
        KeyValue::new("Realized Profits", money(summary.total_realized_profits)),
        KeyValue::new("Current Holdings Value", money(holdings.total_value)),
        KeyValue::new("Current Holdings Units", holdings.total_units.to_string()),
        KeyValue::new("Total Sale Value", money(exits.total_sale_value)),
        KeyValue::new(
            "Average Hold (years)",
            average(&exits.avg_hold_years, |v| v.round_dp(1).to_string()),
        ),
    ];

    if format == OutputFormat::Table {
        print_header("Portfolio Summary");
    }
    print_output(&rows, format)?;

    if let Some(states) = states {
        let rows: Vec<StateRow> = states
            .into_iter()
            .map(|b| StateRow {
                state: b.state,
                properties: b.property_count,
                held: b.current_count,
                units: b.units,
                exit_value: money(b.exit_value),
            })
            .collect();
        if format == OutputFormat::Table {
            print_header("By State");
        }
        print_output(&rows, format)?;
    }

    Ok(())
}
