//! Tier table construction functionality.
//!
//! The tier matrix prices the same job at each volume band's start quantity,
//! so the shop can see cost, published price, and margin move as orders
//! scale. The bands are fixed; the economics inside each are recomputed per
//! quote.

use rust_decimal::Decimal;

use crate::config::PricingSettings;
use crate::error::EngineResult;
use crate::models::TierEntry;

use super::cost::{CostParams, calculate_cost_at_qty};
use super::published::published_price;
use super::rounding::round_to_cents;
use super::wholesale::calculate_wholesale;

/// One quantity band of the fixed tier ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRange {
    /// Stable key used in ladders and legacy payloads.
    pub key: &'static str,
    /// Human label shown in quotes.
    pub range_label: &'static str,
    /// First quantity in the band.
    pub start_qty: u32,
    /// Last quantity in the band; `None` for the open-ended top band.
    pub end_qty: Option<u32>,
}

impl TierRange {
    /// Returns true if `qty` falls inside this band.
    pub fn contains(&self, qty: u32) -> bool {
        match self.end_qty {
            Some(end) => qty >= self.start_qty && qty <= end,
            None => qty >= self.start_qty,
        }
    }
}

/// The fixed volume bands, in ascending order.
pub const TIER_RANGES: [TierRange; 7] = [
    TierRange { key: "1-23", range_label: "1–23", start_qty: 1, end_qty: Some(23) },
    TierRange { key: "24-47", range_label: "24–47", start_qty: 24, end_qty: Some(47) },
    TierRange { key: "48-95", range_label: "48–95", start_qty: 48, end_qty: Some(95) },
    TierRange { key: "96-143", range_label: "96–143", start_qty: 96, end_qty: Some(143) },
    TierRange { key: "144-287", range_label: "144–287", start_qty: 144, end_qty: Some(287) },
    TierRange { key: "288-575", range_label: "288–575", start_qty: 288, end_qty: Some(575) },
    TierRange { key: "576+", range_label: "576+", start_qty: 576, end_qty: None },
];

/// Finds the band containing `qty`.
///
/// Bands are inclusive and the top band is open-ended, so every quantity of
/// at least 1 lands somewhere; quantities below the first band clamp to it.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::tier_for_qty;
///
/// assert_eq!(tier_for_qty(100).key, "96-143");
/// assert_eq!(tier_for_qty(10_000).key, "576+");
/// ```
pub fn tier_for_qty(qty: u32) -> &'static TierRange {
    TIER_RANGES
        .iter()
        .find(|tier| tier.contains(qty))
        .unwrap_or(&TIER_RANGES[0])
}

/// Builds the full tier matrix for a job.
///
/// Each band's cost breakdown is recomputed at the band's start quantity.
/// The published price comes from the shop ladder (or stock ladder); the
/// wholesale price is derived from that band's cost. Profit, margin, and the
/// below-cost / low-margin warning flags follow.
///
/// Shop-entered ladders are not guaranteed to step down as volume rises, and
/// customers expect monotone volume discounts. A band whose price would
/// match or exceed the previous band's is clamped to the previous price
/// minus the configured step-down, but never below that band's cost plus the
/// minimum profit floor. The floor wins if the two conflict.
///
/// # Arguments
///
/// * `active_qty` - The requested quantity, used to flag the active band
/// * `params` - Resolved cost inputs
/// * `pricing` - The shop's pricing settings
///
/// # Returns
///
/// Returns the seven [`TierEntry`] values in ascending band order.
pub fn build_tier_table(
    active_qty: u32,
    params: &CostParams,
    pricing: &PricingSettings,
) -> EngineResult<Vec<TierEntry>> {
    let ladder = pricing.published_ladder(params.quote_type);
    let active_key = tier_for_qty(active_qty).key;
    let low_margin_threshold = Decimal::from(20);

    let mut entries = Vec::with_capacity(TIER_RANGES.len());
    let mut previous_price: Option<Decimal> = None;

    for tier in TIER_RANGES.iter() {
        let breakdown = calculate_cost_at_qty(tier.start_qty, params)?;
        let cost_per_piece = breakdown.cost_per_piece;

        let mut published =
            round_to_cents(published_price(tier.key, ladder, params.quote_type));
        if let Some(prev) = previous_price {
            if published >= prev {
                let stepped = prev - pricing.min_tier_step_down;
                let floor = cost_per_piece + pricing.min_profit_floor;
                published = stepped.max(floor);
            }
        }
        previous_price = Some(published);

        let wholesale_per_piece = calculate_wholesale(cost_per_piece, pricing);
        let profit_per_piece = round_to_cents(published - cost_per_piece);
        let margin_pct = if published > Decimal::ZERO {
            round_to_cents(profit_per_piece / published * Decimal::from(100))
        } else {
            round_to_cents(Decimal::ZERO)
        };

        let setup_fee_applied = if tier.start_qty >= pricing.setup_waive_qty {
            round_to_cents(Decimal::ZERO)
        } else {
            round_to_cents(pricing.setup_fee)
        };
        let total_at_start_qty =
            round_to_cents(published * Decimal::from(tier.start_qty) + setup_fee_applied);

        entries.push(TierEntry {
            key: tier.key.to_string(),
            range_label: tier.range_label.to_string(),
            start_qty: tier.start_qty,
            end_qty: tier.end_qty,
            is_active: tier.key == active_key,
            published_per_piece: published,
            cost_per_piece,
            wholesale_per_piece,
            profit_per_piece,
            margin_pct,
            setup_fee_applied,
            total_at_start_qty,
            below_cost: published < cost_per_piece,
            low_margin: margin_pct < low_margin_threshold,
            breakdown,
        });
    }

    Ok(entries)
}
