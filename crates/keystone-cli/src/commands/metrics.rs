//! Metrics command implementation.
//!
//! Per-property return metrics for the whole dataset.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use keystone_analytics::format::{
    format_currency, format_metric, format_multiple, format_signed_percent, NOT_AVAILABLE,
};
use keystone_analytics::metrics::PropertyMetrics;
use keystone_core::{Metric, PropertyRecord};
use keystone_portfolio::{calculate_all_metrics, AggregationConfig};

use crate::cli::OutputFormat;
use crate::commands::load_records;
use crate::output::{print_header, print_json, print_note, print_output};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Property file (.json or .csv). Defaults to the built-in dataset.
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// One table row.
#[derive(Debug, Serialize, Tabled)]
struct MetricsRow {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Exit Value")]
    exit_value: String,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "IRR")]
    irr: String,
    #[tabled(rename = "Equity Multiple")]
    equity_multiple: String,
    #[tabled(rename = "Cash-on-Cash")]
    cash_on_cash: String,
}

/// Reported values are marked with `*`.
fn display(metric: &Metric, f: impl FnOnce(Decimal) -> String) -> String {
    let text = format_metric(metric, f);
    if metric.is_fallback() {
        format!("{text}*")
    } else {
        text
    }
}

fn amount(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_currency)
}

impl MetricsRow {
    fn new(record: &PropertyRecord, metrics: &PropertyMetrics) -> Self {
        Self {
            property: record.name.clone(),
            status: record.status.to_string(),
            exit_value: format_currency(metrics.exit_value),
            investment: amount(metrics.initial_investment),
            profit: amount(metrics.total_profit),
            irr: display(&metrics.irr, |v| format_signed_percent(v, 1)),
            equity_multiple: display(&metrics.equity_multiple, |v| format_multiple(v, 2)),
            cash_on_cash: display(&metrics.cash_on_cash, |v| format_signed_percent(v, 1)),
        }
    }
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, format: OutputFormat) -> Result<()> {
    let records = load_records(args.data.as_deref())?;
    let metrics = calculate_all_metrics(&records, &AggregationConfig::default());

    if format == OutputFormat::Json {
        print_json(&metrics)?;
        return Ok(());
    }

    let rows: Vec<MetricsRow> = records
        .iter()
        .zip(&metrics)
        .map(|(record, m)| MetricsRow::new(record, m))
        .collect();

    if format == OutputFormat::Table {
        print_header("Property Metrics");
    }
    print_output(&rows, format)?;
    if format == OutputFormat::Table && metrics.iter().any(has_fallback) {
        print_note("* reported value");
    }

    Ok(())
}

fn has_fallback(metrics: &PropertyMetrics) -> bool {
    metrics.irr.is_fallback()
        || metrics.equity_multiple.is_fallback()
        || metrics.cash_on_cash.is_fallback()
}
