//! # Keystone Portfolio
//!
//! Portfolio aggregation for real-estate holdings.
//!
//! This crate rolls per-property records up into the firm-level figures
//! shown on the portfolio and track-record views.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **One formula source**: Exit value and per-property metrics come from `keystone-analytics`
//! - **Honest averages**: Means carry their sample count; "no data" is never a silent zero
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keystone_portfolio::prelude::*;
//!
//! let config = AggregationConfig::default();
//! let summary = calculate_portfolio_summary(&records, &config);
//! let holdings = CurrentHoldingsSummary::calculate(&records);
//! let exits = ExitSummary::calculate(&records);
//! let by_state = bucket_by_state(&records);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large record sets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod types;

pub use analytics::{
    calculate_all_metrics, calculate_portfolio_summary, CurrentHoldingsSummary, ExitSummary,
    PortfolioSummary,
};
pub use bucketing::{bucket_by_state, StateBucket};
pub use types::{AggregationConfig, Average};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        calculate_all_metrics, calculate_portfolio_summary, CurrentHoldingsSummary, ExitSummary,
        PortfolioSummary,
    };
    pub use crate::bucketing::{bucket_by_state, StateBucket};
    pub use crate::types::{AggregationConfig, Average};
    pub use keystone_core::{PropertyRecord, PropertyStatus};
    pub use rust_decimal::Decimal;
}
