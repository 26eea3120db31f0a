//! Record-batch traversal that switches to rayon for large portfolios.
//!
//! Sequential below [`AggregationConfig::parallel_threshold`] or without the
//! `parallel` feature. Both paths produce the same result.

use keystone_core::PropertyRecord;

use crate::types::AggregationConfig;

/// A running aggregate over property records.
///
/// `merge` must be associative with `Default::default()` as its identity;
/// the parallel path folds chunks independently and merges them in
/// arbitrary groupings.
pub trait RecordAccumulator: Default + Send {
    /// Folds one record in.
    #[must_use]
    fn add(self, record: &PropertyRecord) -> Self;

    /// Combines two partial aggregates.
    #[must_use]
    fn merge(self, other: Self) -> Self;
}

/// Aggregates `records` into `A`.
pub fn accumulate<A>(records: &[PropertyRecord], config: &AggregationConfig) -> A
where
    A: RecordAccumulator,
{
    if config.should_parallelize(records.len()) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return records
                .par_iter()
                .fold(A::default, A::add)
                .reduce(A::default, A::merge);
        }
    }

    records.iter().fold(A::default(), A::add)
}

/// Applies `f` to each record, preserving record order.
pub fn map_records<U, F>(records: &[PropertyRecord], config: &AggregationConfig, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(&PropertyRecord) -> U + Sync + Send,
{
    if config.should_parallelize(records.len()) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return records.par_iter().map(f).collect();
        }
    }

    records.iter().map(f).collect()
}
