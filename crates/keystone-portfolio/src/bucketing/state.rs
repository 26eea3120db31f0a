//! State-based portfolio bucketing.

use std::collections::BTreeMap;

use keystone_analytics::metrics::exit_value;
use keystone_core::PropertyRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated figures for the properties in one state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateBucket {
    /// State code.
    pub state: String,
    /// Number of properties.
    pub property_count: usize,
    /// Number of properties still held.
    pub current_count: usize,
    /// Σ units.
    pub units: u64,
    /// Σ exit value.
    pub exit_value: Decimal,
}

/// Groups `records` by state, sorted by state code.
///
/// State codes are compared after trimming and upper-casing, so `"ct"` and
/// `"CT"` share a bucket.
#[must_use]
pub fn bucket_by_state(records: &[PropertyRecord]) -> Vec<StateBucket> {
    let mut buckets: BTreeMap<String, StateBucket> = BTreeMap::new();

    for record in records {
        let state = record.state.trim().to_uppercase();
        let bucket = buckets.entry(state.clone()).or_insert_with(|| StateBucket {
            state,
            ..StateBucket::default()
        });
        bucket.property_count += 1;
        if record.is_current() {
            bucket.current_count += 1;
        }
        bucket.units += u64::from(record.units);
        bucket.exit_value = bucket.exit_value.saturating_add(exit_value(record));
    }

    buckets.into_values().collect()
}
