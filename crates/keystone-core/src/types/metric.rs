//! Three-state metric results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a metric value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricSource {
    /// Derived from the record's raw fields.
    Computed,
    /// Taken verbatim from a stored, previously reported value.
    Fallback,
    /// Neither derivable nor stored.
    Unavailable,
}

/// Result of a return formula.
///
/// Callers must be able to tell a derived number from a reported one, and
/// both from "no data". Zero is a real value here, never a placeholder.
///
/// Serialized as `{"source": "computed", "value": 24.6}` or
/// `{"source": "unavailable"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Metric {
    /// Derived from the record's raw fields.
    Computed(Decimal),
    /// Stored value used because the derivation's preconditions failed.
    Fallback(Decimal),
    /// Not computable and nothing stored.
    Unavailable,
}

impl Metric {
    /// Wraps a stored value: `Fallback` when present, `Unavailable` otherwise.
    #[must_use]
    pub fn from_stored(stored: Option<Decimal>) -> Self {
        stored.map_or(Self::Unavailable, Self::Fallback)
    }

    /// Replaces `Unavailable` with the stored value, if any.
    ///
    /// Computed and fallback values are returned unchanged.
    #[must_use]
    pub fn or_fallback(self, stored: Option<Decimal>) -> Self {
        match self {
            Self::Unavailable => Self::from_stored(stored),
            other => other,
        }
    }

    /// Returns the numeric value regardless of its source.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Computed(v) | Self::Fallback(v) => Some(*v),
            Self::Unavailable => None,
        }
    }

    /// Returns where the value came from.
    #[must_use]
    pub fn source(&self) -> MetricSource {
        match self {
            Self::Computed(_) => MetricSource::Computed,
            Self::Fallback(_) => MetricSource::Fallback,
            Self::Unavailable => MetricSource::Unavailable,
        }
    }

    /// True when the value was derived from raw fields.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// True when the value was taken from a stored field.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// True when there is any value at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    /// Rounds the carried value, keeping the source.
    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        match self {
            Self::Computed(v) => Self::Computed(v.round_dp(dp)),
            Self::Fallback(v) => Self::Fallback(v.round_dp(dp)),
            Self::Unavailable => Self::Unavailable,
        }
    }
}
