//! Wholesale price calculation functionality.
//!
//! Wholesale is the mechanical cost-plus price: cost marked up by a
//! percentage, or cost divided through a target margin. It is always
//! computed alongside the published price so the shop can see where its
//! ladder sits relative to cost.

use rust_decimal::Decimal;

use crate::config::{PricingMethod, PricingSettings};

use super::rounding::round_to_nickel;

/// The highest margin percentage the margin method will honor.
///
/// Caps the divisor away from zero; a 100% margin would ask for an infinite
/// price.
fn max_margin_pct() -> Decimal {
    Decimal::from(99)
}

/// Derives the wholesale per-piece price from cost.
///
/// The markup method multiplies cost by `1 + markup%`; the margin method
/// divides cost by `1 - margin%`, with the margin capped at 99%. The result
/// is rounded to the nearest nickel, the quote-facing convention for derived
/// prices.
///
/// # Arguments
///
/// * `cost_per_piece` - The fully loaded per-piece cost
/// * `pricing` - The shop's pricing settings
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::calculate_wholesale;
/// use quotekit_engine::config::PricingSettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pricing = PricingSettings::default(); // markup method at 50%
/// let cost = Decimal::from_str("3.70").unwrap();
/// assert_eq!(
///     calculate_wholesale(cost, &pricing),
///     Decimal::from_str("5.55").unwrap()
/// );
/// ```
pub fn calculate_wholesale(cost_per_piece: Decimal, pricing: &PricingSettings) -> Decimal {
    let hundred = Decimal::from(100);

    let raw = match pricing.method {
        PricingMethod::Margin => {
            let margin = pricing.margin_pct.min(max_margin_pct()) / hundred;
            cost_per_piece / (Decimal::ONE - margin)
        }
        PricingMethod::Markup => {
            let markup = pricing.markup_pct / hundred;
            cost_per_piece * (Decimal::ONE + markup)
        }
    };

    round_to_nickel(raw)
}
