//! Core types for portfolio aggregation.

mod average;
mod config;

pub use average::Average;
pub use config::AggregationConfig;
