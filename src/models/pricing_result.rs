//! Pricing result models.
//!
//! This module contains the [`PricingResult`] type and its associated
//! structures that capture all outputs from one quote computation: the
//! active-quantity pricing, the full tier matrix, the customer-facing view,
//! and the generated quote scripts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostBreakdown;

/// The price a customer-facing pass-through price is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBaseline {
    /// Derive from the published per-tier price.
    #[default]
    Published,
    /// Derive from the cost-based wholesale price.
    Wholesale,
}

/// Pricing for one quantity band of the tier matrix.
///
/// Every tier carries its own cost breakdown recomputed at the tier's start
/// quantity, so adjacent tiers are directly comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    /// Stable tier key (e.g., "144-287").
    pub key: String,
    /// Human label for the band (e.g., "144–287").
    pub range_label: String,
    /// First quantity in the band.
    pub start_qty: u32,
    /// Last quantity in the band; `None` for the open-ended top tier.
    pub end_qty: Option<u32>,
    /// Whether the requested quantity falls in this band.
    pub is_active: bool,
    /// Published per-piece price for this band.
    pub published_per_piece: Decimal,
    /// Per-piece cost at the band's start quantity.
    pub cost_per_piece: Decimal,
    /// Cost-plus wholesale per-piece price at the band's start quantity.
    pub wholesale_per_piece: Decimal,
    /// Published price minus cost.
    pub profit_per_piece: Decimal,
    /// Profit as a percentage of the published price.
    pub margin_pct: Decimal,
    /// Setup fee that would apply to an order at the start quantity.
    pub setup_fee_applied: Decimal,
    /// Order total at the start quantity, setup fee included.
    pub total_at_start_qty: Decimal,
    /// The published price does not cover cost.
    pub below_cost: bool,
    /// Margin is under 20%.
    pub low_margin: bool,
    /// Full cost breakdown at the start quantity.
    pub breakdown: CostBreakdown,
}

impl TierEntry {
    /// Returns true if either warning flag is set.
    pub fn has_warning(&self) -> bool {
        self.below_cost || self.low_margin
    }
}

/// Pricing at the quantity the caller actually asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePricing {
    /// The requested quantity.
    pub qty: u32,
    /// Key of the tier the quantity falls in.
    pub tier_key: String,
    /// Quoted per-piece price (the active tier's published price).
    pub unit_price: Decimal,
    /// Per-piece cost at the requested quantity.
    pub cost_per_piece: Decimal,
    /// Cost-plus wholesale per-piece price at the requested quantity.
    pub wholesale_per_piece: Decimal,
    /// Unit price minus cost per piece.
    pub profit_per_piece: Decimal,
    /// Profit as a percentage of the unit price.
    pub margin_pct: Decimal,
    /// Setup fee applied to this order; zero once the waive quantity is met.
    pub setup_fee_applied: Decimal,
    /// Unit price times quantity.
    pub subtotal: Decimal,
    /// Subtotal plus setup fee.
    pub total: Decimal,
    /// Full cost breakdown at the requested quantity.
    pub breakdown: CostBreakdown,
}

/// One tier of the customer-facing pass-through matrix.
///
/// Used by shops quoting on behalf of a distributor: the customer price is
/// the baseline price plus the configured pass-through markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTierEntry {
    /// Stable tier key (e.g., "144-287").
    pub key: String,
    /// Human label for the band.
    pub range_label: String,
    /// First quantity in the band.
    pub start_qty: u32,
    /// Last quantity in the band; `None` for the open-ended top tier.
    pub end_qty: Option<u32>,
    /// Whether the requested quantity falls in this band.
    pub is_active: bool,
    /// Per-piece price shown to the end customer.
    pub customer_price_per_piece: Decimal,
    /// Pass-through profit per piece (customer price minus baseline).
    pub customer_profit_per_piece: Decimal,
    /// Pass-through profit for an order at the band's start quantity.
    pub customer_profit_total_at_start_qty: Decimal,
}

/// The customer-facing pass-through matrix and the settings that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerView {
    /// Which price the pass-through markup was applied to.
    pub baseline: PriceBaseline,
    /// The pass-through markup percentage.
    pub markup_pct: Decimal,
    /// Per-tier customer pricing.
    pub tiers: Vec<CustomerTierEntry>,
}

/// Copy-paste quote scripts in the three delivery formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteScripts {
    /// One-line script for text messages.
    pub sms: String,
    /// Multi-line script for DMs.
    pub dm: String,
    /// Conversational script for phone calls.
    pub phone: String,
}

/// A prompt nudging the customer toward the next volume tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upsell {
    /// Key of the next tier up.
    pub next_tier_key: String,
    /// Additional units needed to reach the next tier.
    pub qty_needed: u32,
    /// Per-unit saving at the next tier's price.
    pub savings_per_piece: Decimal,
    /// Ready-to-send upsell sentence.
    pub message: String,
}

/// The complete result of one quote computation.
///
/// Every field is recomputed from scratch per invocation; the engine holds
/// no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Pricing at the requested quantity.
    pub active: ActivePricing,
    /// The full ordered tier matrix.
    pub tiers: Vec<TierEntry>,
    /// The customer-facing pass-through view.
    pub customer_view: CustomerView,
    /// Generated quote scripts.
    pub scripts: QuoteScripts,
    /// Next-tier upsell prompt; `None` when already in the top tier.
    pub upsell: Option<Upsell>,
    /// One-line tier pricing summary for the copy button.
    pub tier_pricing_text: String,
    /// The shop hourly rate used for labor costing.
    pub shop_rate_per_hour: Decimal,
    /// The shop per-minute rate used for labor costing.
    pub shop_rate_per_minute: Decimal,
    /// Patches per sheet before waste.
    pub best_yield: u32,
    /// Patches per sheet after waste.
    pub effective_yield: Decimal,
}
