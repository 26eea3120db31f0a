//! Per-property return metrics.
//!
//! Every function here is pure and total: it takes a read-only
//! [`PropertyRecord`](keystone_core::PropertyRecord) and always returns a
//! value. Formulas whose preconditions fail report
//! [`Metric::Fallback`](keystone_core::Metric::Fallback) (a stored, reported
//! value) or [`Metric::Unavailable`](keystone_core::Metric::Unavailable).
//!
//! # Formulas
//!
//! | metric | definition |
//! |---|---|
//! | exit value | sold: `sale_price ?? current_value ?? 0`; current: `current_value ?? sale_price ?? 0` |
//! | initial investment | `acquisition_price + rehab_costs` |
//! | total profit | `exit_value + total_cashflow - initial_investment` |
//! | IRR (%) | `((initial_investment + total_profit) / initial_investment)^(1 / years_held) - 1` |
//! | equity multiple | stored value, else `exit_value / initial_investment` |
//! | cash-on-cash (%) | `total_profit / initial_investment / years_held` |
//!
//! IRR and cash-on-cash share the precondition
//! `initial_investment > 0 && exit_value > 0 && years_held > 0`.
//!
//! Sums and differences are checked. Amounts beyond `Decimal`'s range make
//! investment and profit `None` and the dependent metrics unavailable rather
//! than panicking.

mod property;
mod returns;

pub use property::PropertyMetrics;
pub use returns::{
    cash_on_cash, equity_multiple, exit_value, initial_investment, irr, total_profit,
};
