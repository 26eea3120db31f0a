//! Error types for the analytics engine.
//!
//! Per-property metrics never fail; they degrade to
//! [`Metric::Unavailable`](keystone_core::Metric::Unavailable). Errors here
//! come from user-supplied projection inputs.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input outside the configured range
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfBounds {
        /// Name of the input.
        field: String,
        /// Supplied value.
        value: Decimal,
        /// Lower bound (inclusive).
        min: Decimal,
        /// Upper bound (inclusive).
        max: Decimal,
    },

    /// Arithmetic overflow or an undefined operation
    #[error("calculation failed: {0}")]
    CalculationFailed(String),
}

impl AnalyticsError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a calculation failed error.
    #[must_use]
    pub fn calculation_failed(msg: impl Into<String>) -> Self {
        Self::CalculationFailed(msg.into())
    }
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
