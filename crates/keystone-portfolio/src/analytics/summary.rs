//! Firm-level portfolio summary.

use keystone_analytics::metrics::exit_value;
use keystone_core::{PropertyRecord, PropertyStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parallel::{accumulate, RecordAccumulator};
use crate::types::{AggregationConfig, Average};

/// Headline figures across every record in the portfolio.
///
/// Every total is order independent. Averages are of the *reported*
/// `irr` / `equity_multiple` values, over the records that carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Σ exit value.
    pub total_portfolio_value: Decimal,
    /// Σ units.
    pub total_units: u64,
    /// Σ max(0, exit value − acquisition price).
    pub total_equity_created: Decimal,
    /// Mean reported IRR, in percent.
    pub avg_return: Average,
    /// Mean reported equity multiple.
    pub avg_equity_multiple: Average,
    /// Σ max(0, sale price − acquisition price) over sold records.
    pub total_realized_profits: Decimal,
    /// Number of records.
    pub property_count: usize,
    /// Records still held.
    pub current_count: usize,
    /// Records exited.
    pub sold_count: usize,
}

impl PortfolioSummary {
    /// Equity created as a percentage of portfolio value.
    ///
    /// `None` when the portfolio has no value.
    #[must_use]
    pub fn equity_created_pct(&self) -> Option<Decimal> {
        if self.total_portfolio_value.is_zero() {
            return None;
        }
        self.total_equity_created
            .checked_div(self.total_portfolio_value)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    }
}

/// Running sums over a portfolio.
///
/// Decimal sums saturate. Validated records are bounded by
/// [`MAX_AMOUNT`](keystone_core::MAX_AMOUNT) and never reach the limit.
#[derive(Debug, Clone, Default)]
struct Totals {
    value: Decimal,
    units: u64,
    equity_created: Decimal,
    irr_sum: Decimal,
    irr_count: usize,
    em_sum: Decimal,
    em_count: usize,
    realized: Decimal,
    count: usize,
    current: usize,
    sold: usize,
}

impl RecordAccumulator for Totals {
    fn add(mut self, record: &PropertyRecord) -> Self {
        let exit = exit_value(record);

        self.value = self.value.saturating_add(exit);
        self.units += u64::from(record.units);
        self.equity_created = self.equity_created.saturating_add(gain(exit, record));

        if let Some(irr) = record.irr {
            self.irr_sum = self.irr_sum.saturating_add(irr);
            self.irr_count += 1;
        }
        if let Some(em) = record.equity_multiple {
            self.em_sum = self.em_sum.saturating_add(em);
            self.em_count += 1;
        }

        self.count += 1;
        match record.status {
            PropertyStatus::Current => self.current += 1,
            PropertyStatus::Sold => {
                self.sold += 1;
                self.realized = self.realized.saturating_add(realized_profit(record));
            }
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            value: self.value.saturating_add(other.value),
            units: self.units + other.units,
            equity_created: self.equity_created.saturating_add(other.equity_created),
            irr_sum: self.irr_sum.saturating_add(other.irr_sum),
            irr_count: self.irr_count + other.irr_count,
            em_sum: self.em_sum.saturating_add(other.em_sum),
            em_count: self.em_count + other.em_count,
            realized: self.realized.saturating_add(other.realized),
            count: self.count + other.count,
            current: self.current + other.current,
            sold: self.sold + other.sold,
        }
    }
}

/// `value` over the purchase price, floored at zero.
fn gain(value: Decimal, record: &PropertyRecord) -> Decimal {
    value
        .saturating_sub(record.acquisition_price)
        .max(Decimal::ZERO)
}

/// Σ `values`, saturating at `Decimal`'s bounds.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Gain on sale, floored at zero. An absent sale price contributes nothing.
pub(crate) fn realized_profit(record: &PropertyRecord) -> Decimal {
    record
        .sale_price
        .map_or(Decimal::ZERO, |sale| gain(sale, record))
}

/// Aggregates `records` into a [`PortfolioSummary`].
///
/// Never fails: an empty slice yields zero totals and averages with no
/// samples.
///
/// # Example
///
/// ```ignore
/// let summary = calculate_portfolio_summary(&records, &AggregationConfig::default());
/// println!("{}", format_currency_compact(summary.total_portfolio_value, 2));
/// ```
#[must_use]
pub fn calculate_portfolio_summary(
    records: &[PropertyRecord],
    config: &AggregationConfig,
) -> PortfolioSummary {
    let totals: Totals = accumulate(records, config);

    PortfolioSummary {
        total_portfolio_value: totals.value,
        total_units: totals.units,
        total_equity_created: totals.equity_created,
        avg_return: Average::from_sum(totals.irr_sum, totals.irr_count),
        avg_equity_multiple: Average::from_sum(totals.em_sum, totals.em_count),
        total_realized_profits: totals.realized,
        property_count: totals.count,
        current_count: totals.current,
        sold_count: totals.sold,
    }
}
