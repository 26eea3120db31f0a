//! Portfolio-level analytics.
//!
//! - [`summary`]: firm-wide totals and averages
//! - [`holdings`]: properties still held
//! - [`exits`]: sold properties
//! - [`metrics`]: per-property metrics for a batch
//! - [`parallel`]: record traversal, on rayon for large portfolios

pub mod exits;
pub mod holdings;
pub mod metrics;
pub mod parallel;
pub mod summary;

pub use exits::ExitSummary;
pub use holdings::CurrentHoldingsSummary;
pub use metrics::calculate_all_metrics;
pub use parallel::{accumulate, map_records, RecordAccumulator};
pub use summary::{calculate_portfolio_summary, PortfolioSummary};
