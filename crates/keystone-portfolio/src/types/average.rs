//! Sample means that remember their sample size.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Arithmetic mean together with the number of samples behind it.
///
/// An empty sample has `value = 0` and `sample_count = 0`; check
/// [`has_data`](Self::has_data) before presenting the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Average {
    /// Mean of the samples, or zero with no samples.
    pub value: Decimal,
    /// Number of samples.
    pub sample_count: usize,
}

impl Average {
    /// Mean of `sum` over `count` samples.
    #[must_use]
    pub fn from_sum(sum: Decimal, count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let value = sum
            .checked_div(Decimal::from(count))
            .unwrap_or(Decimal::ZERO);
        Self {
            value,
            sample_count: count,
        }
    }

    /// Mean of the present values in `samples`.
    pub fn of_present<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Option<Decimal>>,
    {
        let (sum, count) = samples
            .into_iter()
            .flatten()
            .fold((Decimal::ZERO, 0usize), |(sum, count), v| {
                (sum.saturating_add(v), count + 1)
            });
        Self::from_sum(sum, count)
    }

    /// True if at least one sample contributed.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }

    /// The mean, or `None` with no samples.
    #[must_use]
    pub fn value_if_any(&self) -> Option<Decimal> {
        self.has_data().then_some(self.value)
    }
}
