//! Display formatting for metric values.
//!
//! Used only at rendering boundaries (CLI tables, reports). Nothing here
//! feeds back into a calculation.

use keystone_core::Metric;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const THOUSAND: Decimal = dec!(1000);
const MILLION: Decimal = dec!(1000000);

/// Placeholder rendered for [`Metric::Unavailable`].
pub const NOT_AVAILABLE: &str = "N/A";

fn round(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // No "-0.0".
    if rounded.is_zero() {
        rounded.abs()
    } else {
        rounded
    }
}

fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round(value, dp))
}

fn sign(value: Decimal) -> &'static str {
    if value < Decimal::ZERO {
        "-"
    } else {
        ""
    }
}

/// Compact currency: `$1.50M`, `$376K`, `$950`.
///
/// Millions use `million_dp` decimals; thousands and units are whole.
///
/// ```rust
/// use keystone_analytics::format::format_currency_compact;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency_compact(dec!(1500000), 2), "$1.50M");
/// assert_eq!(format_currency_compact(dec!(375500), 2), "$376K");
/// ```
#[must_use]
pub fn format_currency_compact(value: Decimal, million_dp: u32) -> String {
    let abs = value.abs();
    let body = if abs >= MILLION {
        format!("{}M", fixed(abs / MILLION, million_dp))
    } else if abs >= THOUSAND {
        format!("{}K", fixed(abs / THOUSAND, 0))
    } else {
        fixed(abs, 0)
    };
    format!("{}${body}", sign(value))
}

/// Whole-dollar currency with thousands separators: `$371,293`.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let digits = round(value.abs(), 0).trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = round(value, 0) < Decimal::ZERO;
    format!("{}${grouped}", if negative { "-" } else { "" })
}

/// Percent with `dp` decimals: `24.6%`.
#[must_use]
pub fn format_percent(value: Decimal, dp: u32) -> String {
    format!("{}%", fixed(value, dp))
}

/// Percent with an explicit sign: `+24.6%`, `-1.1%`.
#[must_use]
pub fn format_signed_percent(value: Decimal, dp: u32) -> String {
    let rounded = round(value, dp);
    let prefix = if rounded >= Decimal::ZERO { "+" } else { "" };
    format!("{prefix}{}%", fixed(rounded, dp))
}

/// Multiple with `dp` decimals: `3.04x`.
#[must_use]
pub fn format_multiple(value: Decimal, dp: u32) -> String {
    format!("{}x", fixed(value, dp))
}

/// Formats an available metric with `f`, or returns `N/A`.
///
/// ```rust
/// use keystone_analytics::format::{format_metric, format_multiple};
/// use keystone_core::Metric;
/// use rust_decimal_macros::dec;
///
/// let em = Metric::Fallback(dec!(3.04));
/// assert_eq!(format_metric(&em, |v| format_multiple(v, 2)), "3.04x");
/// assert_eq!(format_metric(&Metric::Unavailable, |v| format_multiple(v, 2)), "N/A");
/// ```
pub fn format_metric(metric: &Metric, f: impl FnOnce(Decimal) -> String) -> String {
    metric.value().map_or_else(|| NOT_AVAILABLE.to_string(), f)
}
