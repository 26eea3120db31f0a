//! Summary of exited properties.

use keystone_core::PropertyRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::summary::{realized_profit, saturating_sum};
use crate::types::Average;

/// Track record on sold properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitSummary {
    /// Number of sold properties.
    pub sold_count: usize,
    /// Σ sale price of sold properties.
    pub total_sale_value: Decimal,
    /// Σ max(0, sale price − acquisition price).
    pub total_realized_profits: Decimal,
    /// Mean reported equity multiple among sold properties.
    pub avg_equity_multiple: Average,
    /// Mean reported holding period, in years.
    pub avg_hold_years: Average,
}

impl ExitSummary {
    /// Summarizes the sold records in `records`; current records are skipped.
    #[must_use]
    pub fn calculate(records: &[PropertyRecord]) -> Self {
        let sold: Vec<&PropertyRecord> = records.iter().filter(|r| r.is_sold()).collect();

        Self {
            sold_count: sold.len(),
            total_sale_value: saturating_sum(sold.iter().filter_map(|r| r.sale_price)),
            total_realized_profits: saturating_sum(sold.iter().map(|r| realized_profit(r))),
            avg_equity_multiple: Average::of_present(sold.iter().map(|r| r.equity_multiple)),
            avg_hold_years: Average::of_present(sold.iter().map(|r| r.years_held)),
        }
    }
}
