//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored as `f64` (CSV columns, JSON payloads) but every sum and
//! product goes through `Decimal`, then is rounded to 2 decimal places
//! half-up on the way back.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round to cents, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// unit price × quantity
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Sum of f64 amounts, computed exactly
pub fn sum_amounts(amounts: impl IntoIterator<Item = f64>) -> Decimal {
    amounts.into_iter().map(to_decimal).sum()
}
