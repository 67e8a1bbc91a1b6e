//! Money rounding helpers.
//!
//! Two granularities appear in a quote: cost figures round to the cent, and
//! customer-facing derived prices (wholesale, pass-through) round to the
//! nearest nickel. Both round midpoints away from zero and always carry two
//! decimal places so serialized output is stable.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a dollar value to the nearest cent.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("10.123").unwrap();
/// assert_eq!(round_to_cents(value).to_string(), "10.12");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Rounds a dollar value to the nearest nickel ($0.05).
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::round_to_nickel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("7.68").unwrap();
/// assert_eq!(round_to_nickel(value).to_string(), "7.70");
/// ```
pub fn round_to_nickel(value: Decimal) -> Decimal {
    let twenty = Decimal::from(20);
    let mut rounded = (value * twenty)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        / twenty;
    rounded.rescale(2);
    rounded
}
