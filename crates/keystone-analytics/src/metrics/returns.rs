//! Return formulas.

use keystone_core::{Metric, PropertyRecord, PropertyStatus};
use rust_decimal::{Decimal, MathematicalOps};

/// Value used to represent what the asset is worth or was sold for.
///
/// Sold records prefer the sale price, current records prefer the current
/// value; either falls back to the other, then to zero.
#[must_use]
pub fn exit_value(record: &PropertyRecord) -> Decimal {
    let (primary, secondary) = match record.status {
        PropertyStatus::Sold => (record.sale_price, record.current_value),
        PropertyStatus::Current => (record.current_value, record.sale_price),
    };
    primary.or(secondary).unwrap_or(Decimal::ZERO)
}

/// Capital put into the property: purchase price plus rehab.
///
/// `None` only when the sum leaves `Decimal`'s range, which a record that
/// passed [`PropertyRecord::validate`] cannot reach.
#[must_use]
pub fn initial_investment(record: &PropertyRecord) -> Option<Decimal> {
    record
        .acquisition_price
        .checked_add(record.rehab_costs_or_zero())
}

/// Exit value plus distributed cash, less the initial investment.
///
/// Negative for a loss; `None` on overflow, as for [`initial_investment`].
#[must_use]
pub fn total_profit(record: &PropertyRecord) -> Option<Decimal> {
    exit_value(record)
        .checked_add(record.total_cashflow)?
        .checked_sub(initial_investment(record)?)
}

/// Inputs shared by the annualized metrics, present only when
/// `initial_investment > 0`, `exit_value > 0` and `years_held > 0`.
struct AnnualizationBasis {
    investment: Decimal,
    profit: Decimal,
    years: Decimal,
}

impl AnnualizationBasis {
    fn from_record(record: &PropertyRecord) -> Option<Self> {
        let investment = initial_investment(record)?;
        let years = record.years_held?;

        if investment <= Decimal::ZERO
            || exit_value(record) <= Decimal::ZERO
            || years <= Decimal::ZERO
        {
            return None;
        }

        Some(Self {
            investment,
            profit: total_profit(record)?,
            years,
        })
    }
}

/// Annualized compound rate implied by total profit over the holding period,
/// in percent.
///
/// Falls back to the record's stored `irr` when the precondition fails or the
/// rate is undefined (a negative growth ratio, or arithmetic that overflows).
#[must_use]
pub fn irr(record: &PropertyRecord) -> Metric {
    compound_rate(record)
        .map_or(Metric::Unavailable, Metric::Computed)
        .or_fallback(record.irr)
}

fn compound_rate(record: &PropertyRecord) -> Option<Decimal> {
    let basis = AnnualizationBasis::from_record(record)?;
    let total_return = basis.investment.checked_add(basis.profit)?;
    let growth = total_return.checked_div(basis.investment)?;

    if growth < Decimal::ZERO {
        return None;
    }
    if growth.is_zero() {
        return Some(-Decimal::ONE_HUNDRED);
    }

    let exponent = Decimal::ONE.checked_div(basis.years)?;
    let factor = growth.checked_powd(exponent)?;
    factor.checked_sub(Decimal::ONE)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Ratio of value returned to capital invested.
///
/// The stored `equity_multiple` is preferred and returned verbatim as
/// [`Metric::Fallback`], even where it disagrees with the record's other
/// fields. Without one, `exit_value / initial_investment` is computed.
#[must_use]
pub fn equity_multiple(record: &PropertyRecord) -> Metric {
    if let Some(stored) = record.equity_multiple {
        return Metric::Fallback(stored);
    }

    let Some(investment) = initial_investment(record).filter(|i| *i > Decimal::ZERO) else {
        return Metric::Unavailable;
    };

    exit_value(record)
        .checked_div(investment)
        .map_or(Metric::Unavailable, Metric::Computed)
}

/// Total profit relative to capital, annualized linearly, in percent.
///
/// Not a compound rate; never substituted for IRR. There is no stored
/// cash-on-cash, so a failed precondition is [`Metric::Unavailable`].
#[must_use]
pub fn cash_on_cash(record: &PropertyRecord) -> Metric {
    let Some(basis) = AnnualizationBasis::from_record(record) else {
        return Metric::Unavailable;
    };

    basis
        .profit
        .checked_div(basis.investment)
        .and_then(|ratio| ratio.checked_div(basis.years))
        .and_then(|annual| annual.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Metric::Unavailable, Metric::Computed)
}
