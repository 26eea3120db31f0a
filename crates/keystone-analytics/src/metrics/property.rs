//! Bundled metrics for a single property.

use keystone_core::{Metric, PropertyId, PropertyRecord, PropertyStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::returns::{
    cash_on_cash, equity_multiple, exit_value, initial_investment, irr, total_profit,
};

/// All return metrics for one property, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    /// Property the metrics describe.
    pub property_id: PropertyId,
    /// Holding status at calculation time.
    pub status: PropertyStatus,
    /// Sale price or current value, per status.
    pub exit_value: Decimal,
    /// Acquisition price plus rehab; `None` if it overflows.
    pub initial_investment: Option<Decimal>,
    /// Exit value plus cashflow less investment; `None` if it overflows.
    pub total_profit: Option<Decimal>,
    /// Annualized compound return, in percent.
    pub irr: Metric,
    /// Exit value over investment.
    pub equity_multiple: Metric,
    /// Linear annualized return on investment, in percent.
    pub cash_on_cash: Metric,
}

impl PropertyMetrics {
    /// Calculates every metric for `record`.
    #[must_use]
    pub fn calculate(record: &PropertyRecord) -> Self {
        Self {
            property_id: record.id.clone(),
            status: record.status,
            exit_value: exit_value(record),
            initial_investment: initial_investment(record),
            total_profit: total_profit(record),
            irr: irr(record),
            equity_multiple: equity_multiple(record),
            cash_on_cash: cash_on_cash(record),
        }
    }

    /// Profit is strictly positive.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.total_profit.is_some_and(|profit| profit > Decimal::ZERO)
    }
}

impl From<&PropertyRecord> for PropertyMetrics {
    fn from(record: &PropertyRecord) -> Self {
        Self::calculate(record)
    }
}
