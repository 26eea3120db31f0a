//! # Keystone Analytics
//!
//! Return metrics for real-estate holdings.
//!
//! This crate holds every return formula in Keystone, once:
//! - **Metrics**: Exit value, initial investment, total profit, IRR, equity multiple, cash-on-cash
//! - **Projection**: Compound-growth "what-if" calculator
//! - **Format**: Rendering-boundary helpers (`$1.50M`, `+24.6%`, `3.04x`)
//!
//! ## Architecture
//!
//! Metrics are pure functions of a [`PropertyRecord`](keystone_core::PropertyRecord).
//! Each returns a [`Metric`](keystone_core::Metric) that distinguishes a computed
//! value from a stored fallback and from "unavailable". Formatting is kept out of
//! the formulas: values stay raw [`Decimal`](rust_decimal::Decimal)s until they
//! reach a renderer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keystone_analytics::prelude::*;
//!
//! let metrics = PropertyMetrics::calculate(&record);
//! match metrics.irr {
//!     Metric::Computed(v) => println!("IRR {}", format_signed_percent(v, 1)),
//!     Metric::Fallback(v) => println!("IRR {} (reported)", format_signed_percent(v, 1)),
//!     Metric::Unavailable => println!("IRR N/A"),
//! }
//!
//! let projection = project(&ProjectionInput::new(dec!(100000), dec!(0.30), 5))?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod metrics;
pub mod projection;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use keystone_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::format::{
        format_currency, format_currency_compact, format_metric, format_multiple,
        format_percent, format_signed_percent,
    };
    pub use crate::metrics::{
        cash_on_cash, equity_multiple, exit_value, initial_investment, irr, total_profit,
        PropertyMetrics,
    };
    pub use crate::projection::{
        project, ProjectionBounds, ProjectionInput, ProjectionResult, ProjectionYear,
    };
    pub use keystone_core::{Metric, MetricSource, PropertyRecord, PropertyStatus};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
