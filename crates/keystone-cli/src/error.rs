//! CLI error types.

use keystone_analytics::AnalyticsError;
use keystone_traits::error::TraitError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Property data could not be loaded.
    #[error("Failed to load properties: {0}")]
    Data(#[from] TraitError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] AnalyticsError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
