//! Error types for trait operations.

use keystone_core::KeystoneError;
use thiserror::Error;

/// Common error type for data-source operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Source not available
    #[error("source not available: {0}")]
    SourceNotAvailable(String),

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// A loaded record failed validation
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] KeystoneError),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl TraitError {
    /// Create a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a source-not-available error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::SourceNotAvailable(msg.into())
    }
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}

/// Result type for data-source operations.
pub type TraitResult<T> = Result<T, TraitError>;
