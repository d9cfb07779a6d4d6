//! Discount and total calculations.
//!
//! Prices are stored as f64 (SQLite REAL) but all arithmetic goes through
//! `rust_decimal` so repeated discounting and summation cannot drift.
//! One formula is used everywhere a total appears: the cart view, the
//! checkout view, and the placed order all charge the discounted unit
//! price derived from the cart line's snapshot price.

use rust_decimal::prelude::*;

/// Monetary values are rounded to 2 decimal places, half-up.
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation.
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage/display, rounded to 2 places.
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary amount to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    to_f64(to_decimal(amount))
}

/// Unit price after applying a percentage discount.
///
/// `None` and `0` both mean "no discount" and return the price unchanged.
/// A positive percentage yields `round2(price * (1 - percent / 100))`.
pub fn discounted_unit_price(price: f64, discount_percent: Option<i64>) -> f64 {
    let percent = discount_percent.unwrap_or(0);
    if percent <= 0 {
        return price;
    }
    let base = to_decimal(price);
    let multiplier = Decimal::ONE - Decimal::from(percent) / Decimal::ONE_HUNDRED;
    to_f64(base * multiplier)
}

/// Subtotal for one cart line: discounted unit price times quantity.
pub fn line_subtotal(snapshot_price: f64, discount_percent: Option<i64>, quantity: i64) -> f64 {
    let unit = to_decimal(discounted_unit_price(snapshot_price, discount_percent));
    to_f64(unit * Decimal::from(quantity))
}

/// Order total across cart lines, as `(snapshot_price, discount, quantity)`.
pub fn order_total(lines: impl IntoIterator<Item = (f64, Option<i64>, i64)>) -> f64 {
    let sum = lines
        .into_iter()
        .map(|(price, discount, qty)| {
            to_decimal(discounted_unit_price(price, discount)) * Decimal::from(qty)
        })
        .sum::<Decimal>();
    to_f64(sum)
}
