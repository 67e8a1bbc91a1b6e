//! Published price lookup functionality.
//!
//! The published price is what the shop has chosen to charge per tier,
//! independent of cost. Shops configure a ladder per quote type; any tier
//! they leave out falls back to the stock ladder.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::QuoteType;

use super::tiers::TIER_RANGES;

fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

/// The stock ladder used when a shop has not published its own, in tier
/// order.
fn default_ladder(quote_type: QuoteType) -> [Decimal; 7] {
    match quote_type {
        QuoteType::PatchPress => [
            dec(1500, 2),
            dec(1200, 2),
            dec(1100, 2),
            dec(1000, 2),
            dec(950, 2),
            dec(900, 2),
            dec(850, 2),
        ],
        QuoteType::PatchOnly => [
            dec(1000, 2),
            dec(800, 2),
            dec(700, 2),
            dec(650, 2),
            dec(600, 2),
            dec(550, 2),
            dec(500, 2),
        ],
    }
}

/// Fallback when a tier key is unknown to both the shop ladder and the
/// stock ladder.
fn fallback_price() -> Decimal {
    dec(1000, 2)
}

/// Looks up the published per-piece price for a tier.
///
/// The shop's ladder wins when it has an entry for the tier key; otherwise
/// the stock ladder for the quote type applies. The fallback is per key, so
/// a partially configured ladder degrades gracefully instead of failing.
///
/// # Arguments
///
/// * `tier_key` - The tier key (e.g., "144-287")
/// * `ladder` - The shop's configured ladder for this quote type, if any
/// * `quote_type` - Selects the stock ladder for fallback
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::published_price;
/// use quotekit_engine::models::QuoteType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = published_price("144-287", None, QuoteType::PatchPress);
/// assert_eq!(price, Decimal::from_str("9.50").unwrap());
/// ```
pub fn published_price(
    tier_key: &str,
    ladder: Option<&HashMap<String, Decimal>>,
    quote_type: QuoteType,
) -> Decimal {
    if let Some(price) = ladder.and_then(|l| l.get(tier_key)) {
        return *price;
    }

    TIER_RANGES
        .iter()
        .position(|tier| tier.key == tier_key)
        .map(|index| default_ladder(quote_type)[index])
        .unwrap_or_else(fallback_price)
}
