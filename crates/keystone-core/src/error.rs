//! Error types for the Keystone library.
//!
//! Formulas in Keystone never fail: they report unavailable metrics through
//! [`Metric`](crate::Metric). These errors cover record construction and
//! validation only.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Keystone operations.
pub type KeystoneResult<T> = Result<T, KeystoneError>;

/// The main error type for Keystone operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeystoneError {
    /// A required field was not supplied to a builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A record failed validation.
    #[error("Invalid property '{id}': {reason}")]
    InvalidRecord {
        /// Identifier of the offending record.
        id: String,
        /// Reason the record is invalid.
        reason: String,
    },

    /// A monetary or numeric field holds a value outside its domain.
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        /// Name of the field.
        field: String,
        /// The offending value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Unknown property status string.
    #[error("Unknown property status: {0}")]
    UnknownStatus(String),
}

impl KeystoneError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
