//! Batch per-property metrics.

use keystone_analytics::metrics::PropertyMetrics;
use keystone_core::PropertyRecord;

use super::parallel::map_records;
use crate::types::AggregationConfig;

/// Calculates [`PropertyMetrics`] for every record, preserving order.
#[must_use]
pub fn calculate_all_metrics(
    records: &[PropertyRecord],
    config: &AggregationConfig,
) -> Vec<PropertyMetrics> {
    map_records(records, config, PropertyMetrics::calculate)
}
