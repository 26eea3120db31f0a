//! Compound-growth projection.
//!
//! Answers "what would `principal` grow to at `annual_rate` for `years`?".
//! Independent of the property dataset. The rate is always an explicit
//! input; the firm's target rate lives in configuration.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Inputs to [`project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Amount invested at the start.
    pub principal: Decimal,
    /// Annual growth rate as a fraction (`0.30` for 30%).
    pub annual_rate: Decimal,
    /// Whole years of compounding.
    pub years: u32,
}

impl ProjectionInput {
    /// Creates a projection input.
    #[must_use]
    pub fn new(principal: Decimal, annual_rate: Decimal, years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            years,
        }
    }

    fn validate(&self) -> AnalyticsResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if self.years == 0 {
            return Err(AnalyticsError::invalid_input("years must be positive"));
        }
        if self.annual_rate <= -Decimal::ONE {
            return Err(AnalyticsError::invalid_input(format!(
                "annual rate must be greater than -1, got {}",
                self.annual_rate
            )));
        }
        Ok(())
    }
}

/// Outcome of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the result was computed from.
    pub input: ProjectionInput,
    /// `principal × (1 + rate)^years`.
    pub final_value: Decimal,
    /// `final_value − principal`.
    pub total_returns: Decimal,
    /// `final_value / principal`.
    pub return_multiple: Decimal,
    /// `total_returns / years`.
    pub average_annual_gain: Decimal,
}

/// Balance at the end of one projected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    /// 1-based year number.
    pub year: u32,
    /// Balance at year end.
    pub balance: Decimal,
    /// Growth during the year.
    pub gain: Decimal,
}

impl ProjectionResult {
    /// Year-by-year balances for years `1..=years`.
    ///
    /// The last entry's balance equals [`final_value`](Self::final_value).
    #[must_use]
    pub fn schedule(&self) -> Vec<ProjectionYear> {
        let growth = Decimal::ONE + self.input.annual_rate;
        let mut balance = self.input.principal;
        let mut years = Vec::with_capacity(self.input.years as usize);

        for year in 1..=self.input.years {
            let Some(next) = balance.checked_mul(growth) else {
                break;
            };
            years.push(ProjectionYear {
                year,
                balance: next,
                gain: next - balance,
            });
            balance = next;
        }

        years
    }
}

/// Projects compound growth.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if `principal <= 0`,
/// `years == 0` or `annual_rate <= -1`, and
/// [`AnalyticsError::CalculationFailed`] if the result overflows.
///
/// # Example
///
/// ```rust
/// use keystone_analytics::projection::{project, ProjectionInput};
/// use rust_decimal_macros::dec;
///
/// let result = project(&ProjectionInput::new(dec!(100000), dec!(0.30), 5)).unwrap();
/// assert_eq!(result.final_value, dec!(371293));
/// ```
pub fn project(input: &ProjectionInput) -> AnalyticsResult<ProjectionResult> {
    input.validate()?;

    let overflow = || AnalyticsError::calculation_failed("projection overflowed");

    let factor = (Decimal::ONE + input.annual_rate)
        .checked_powu(u64::from(input.years))
        .ok_or_else(overflow)?;
    let final_value = input.principal.checked_mul(factor).ok_or_else(overflow)?;
    let total_returns = final_value - input.principal;
    let return_multiple = final_value
        .checked_div(input.principal)
        .ok_or_else(overflow)?;
    let average_annual_gain = total_returns
        .checked_div(Decimal::from(input.years))
        .ok_or_else(overflow)?;

    Ok(ProjectionResult {
        input: *input,
        final_value,
        total_returns,
        return_multiple,
        average_annual_gain,
    })
}

/// Permitted input range for interactive projections.
///
/// [`project`] accepts any positive input; these bounds apply at the HTTP
/// and CLI surfaces only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionBounds {
    /// Smallest principal accepted.
    pub min_principal: Decimal,
    /// Largest principal accepted.
    pub max_principal: Decimal,
    /// Shortest horizon in years.
    pub min_years: u32,
    /// Longest horizon in years.
    pub max_years: u32,
}

impl Default for ProjectionBounds {
    fn default() -> Self {
        Self {
            min_principal: dec!(50000),
            max_principal: dec!(500000),
            min_years: 2,
            max_years: 10,
        }
    }
}

impl ProjectionBounds {
    /// Checks `input` against the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::OutOfBounds`] naming the first field outside
    /// its range.
    pub fn check(&self, input: &ProjectionInput) -> AnalyticsResult<()> {
        if input.principal < self.min_principal || input.principal > self.max_principal {
            return Err(AnalyticsError::OutOfBounds {
                field: "principal".to_string(),
                value: input.principal,
                min: self.min_principal,
                max: self.max_principal,
            });
        }
        if input.years < self.min_years || input.years > self.max_years {
            return Err(AnalyticsError::OutOfBounds {
                field: "years".to_string(),
                value: Decimal::from(input.years),
                min: Decimal::from(self.min_years),
                max: Decimal::from(self.max_years),
            });
        }
        Ok(())
    }
}
