//! Summary of properties still held.

use keystone_core::PropertyRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for current holdings.
///
/// Values come from `current_value` only; a held property without one
/// counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentHoldingsSummary {
    /// Σ current value of held properties.
    pub total_value: Decimal,
    /// Σ units of held properties.
    pub total_units: u64,
    /// Number of held properties.
    pub property_count: usize,
}

impl CurrentHoldingsSummary {
    /// Summarizes the current records in `records`; sold records are skipped.
    #[must_use]
    pub fn calculate(records: &[PropertyRecord]) -> Self {
        records
            .iter()
            .filter(|r| r.is_current())
            .fold(Self::default(), |mut acc, r| {
                acc.total_value = acc
                    .total_value
                    .saturating_add(r.current_value.unwrap_or(Decimal::ZERO));
                acc.total_units += u64::from(r.units);
                acc.property_count += 1;
                acc
            })
    }
}
