//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values: two-digit rounding the way chart
//! series expect it, currency amounts, compact axis ticks (K/M/B/T) and
//! signed percentage changes.

use crate::shared::Currency;
use rust_decimal::prelude::*;

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
const BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
// 10^12 = 232 * 2^32 + 3_567_587_328
const TRILLION: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);
const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Converts a raw JSON float into a `Decimal`. Non-finite or out-of-range
/// values become zero.
pub fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Rounds to two fraction digits, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a raw float to two fraction digits using the value the float
/// actually holds, so `1.005` (stored as `1.00499…`) becomes `1.00`.
pub fn round2_f64(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(round2)
        .unwrap_or_default()
}

/// Format an amount in the given settlement currency with exactly two
/// fraction digits: `$1,234.50` for MXN, `USD 1,234.50` otherwise.
pub fn currency(value: &Decimal, currency: crate::shared::Currency) -> String {
    let rounded = round2(value.abs());
    let digits = super::num::with_separators(&format!("{:.2}", rounded));
    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match currency {
        Currency::Mxn => format!("{}${}", sign, digits),
        other => format!("{}{} {}", sign, other.code(), digits),
    }
}

/// Compact notation for chart axis ticks: `950`, `1.5K`, `15K`, `2.1M`, `1T`.
///
/// Scaled values under 100 keep one fraction digit; trailing zeros are trimmed.
pub fn compact(value: &Decimal) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();

    let (scaled, suffix) = if abs >= TRILLION {
        (abs / TRILLION, "T")
    } else if abs >= BILLION {
        (abs / BILLION, "B")
    } else if abs >= MILLION {
        (abs / MILLION, "M")
    } else if abs >= THOUSAND {
        (abs / THOUSAND, "K")
    } else {
        (abs, "")
    };

    let rounded = if scaled < HUNDRED {
        scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else {
        scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };
    let digits = super::num::display_formatted_string(rounded.to_string());
    if digits == "0" {
        return digits;
    }
    format!("{}{}{}", sign, digits, suffix)
}

/// Signed percentage with two fraction digits: `+2.50%`, `-1.20%`, `0.00%`.
pub fn signed_percent(value: &Decimal) -> String {
    let rounded = round2(*value);
    let sign = if rounded > Decimal::ZERO { "+" } else { "" };
    format!("{}{:.2}%", sign, rounded)
}
