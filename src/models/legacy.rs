//! Legacy quote representation.
//!
//! Earlier callers of the quoting service consumed a flat record with
//! snake_case field names and a tier-key map. [`LegacyQuote`] reproduces
//! that shape from a [`PricingResult`] so those callers keep working; it is
//! a translation shim, not engine behavior.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PricingResult;

/// Per-tier prices under the legacy calling convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTierPrice {
    /// Published per-piece price for the tier.
    pub unit: Decimal,
    /// Per-piece cost at the tier's start quantity.
    pub cost: Decimal,
    /// Cost-plus wholesale per-piece price for the tier.
    pub wholesale: Decimal,
}

/// A quote flattened to the legacy field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyQuote {
    /// Quoted per-piece price.
    pub unit_price: Decimal,
    /// Fully loaded per-piece cost at the requested quantity.
    pub true_cost_per_hat: Decimal,
    /// Patches per sheet before waste.
    pub best_yield: u32,
    /// Patches per sheet after waste.
    pub effective_yield: Decimal,
    /// Unit price times quantity.
    pub subtotal: Decimal,
    /// Setup fee applied to the order.
    pub setup_fee: Decimal,
    /// Order total, setup fee included.
    pub total_price: Decimal,
    /// Tier key to per-tier prices.
    pub tier_prices_json: HashMap<String, LegacyTierPrice>,
    /// One-line quote script for text messages.
    pub quote_sms: String,
    /// Multi-line quote script for DMs.
    pub quote_dm: String,
    /// Conversational quote script for phone calls.
    pub quote_phone: String,
}

impl From<&PricingResult> for LegacyQuote {
    fn from(result: &PricingResult) -> Self {
        let tier_prices_json = result
            .tiers
            .iter()
            .map(|tier| {
                (
                    tier.key.clone(),
                    LegacyTierPrice {
                        unit: tier.published_per_piece,
                        cost: tier.cost_per_piece,
                        wholesale: tier.wholesale_per_piece,
                    },
                )
            })
            .collect();

        LegacyQuote {
            unit_price: result.active.unit_price,
            true_cost_per_hat: result.active.cost_per_piece,
            best_yield: result.best_yield,
            effective_yield: result.effective_yield,
            subtotal: result.active.subtotal,
            setup_fee: result.active.setup_fee_applied,
            total_price: result.active.total,
            tier_prices_json,
            quote_sms: result.scripts.sms.clone(),
            quote_dm: result.scripts.dm.clone(),
            quote_phone: result.scripts.phone.clone(),
        }
    }
}
