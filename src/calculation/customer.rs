//! Customer pass-through pricing functionality.
//!
//! Shops quoting on behalf of a distributor show the end customer a marked
//! up price and keep the difference. The pass-through markup applies to a
//! configurable baseline: the published price or the wholesale price.

use rust_decimal::Decimal;

use crate::config::PricingSettings;
use crate::models::{CustomerTierEntry, CustomerView, PriceBaseline, TierEntry};

use super::rounding::{round_to_cents, round_to_nickel};

/// The result of a customer price calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPriceResult {
    /// Per-piece price shown to the end customer, on a nickel.
    pub customer_price_per_piece: Decimal,
    /// Pass-through profit per piece (customer price minus baseline).
    pub customer_profit_per_piece: Decimal,
}

/// Applies the pass-through markup to a baseline price.
///
/// # Arguments
///
/// * `baseline` - The price the markup applies to
/// * `customer_markup_pct` - The pass-through markup percentage
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::calculate_customer_price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_customer_price(dec("10.00"), dec("10"));
/// assert_eq!(result.customer_price_per_piece, dec("11.00"));
/// assert_eq!(result.customer_profit_per_piece, dec("1.00"));
/// ```
pub fn calculate_customer_price(
    baseline: Decimal,
    customer_markup_pct: Decimal,
) -> CustomerPriceResult {
    let markup = customer_markup_pct / Decimal::from(100);
    let customer_price_per_piece = round_to_nickel(baseline * (Decimal::ONE + markup));
    let customer_profit_per_piece = round_to_cents(customer_price_per_piece - baseline);

    CustomerPriceResult {
        customer_price_per_piece,
        customer_profit_per_piece,
    }
}

/// Builds the customer-facing view of a tier table.
///
/// Each band's baseline is its published or wholesale price per the shop's
/// configuration; the pass-through markup and profit follow from that.
///
/// # Arguments
///
/// * `tiers` - The already-built tier matrix
/// * `pricing` - The shop's pricing settings
pub fn build_customer_view(tiers: &[TierEntry], pricing: &PricingSettings) -> CustomerView {
    let customer_tiers = tiers
        .iter()
        .map(|tier| {
            let baseline = match pricing.customer_price_baseline {
                PriceBaseline::Published => tier.published_per_piece,
                PriceBaseline::Wholesale => tier.wholesale_per_piece,
            };
            let price = calculate_customer_price(baseline, pricing.customer_markup_pct);
            let profit_total = round_to_cents(
                price.customer_profit_per_piece * Decimal::from(tier.start_qty),
            );

            CustomerTierEntry {
                key: tier.key.clone(),
                range_label: tier.range_label.clone(),
                start_qty: tier.start_qty,
                end_qty: tier.end_qty,
                is_active: tier.is_active,
                customer_price_per_piece: price.customer_price_per_piece,
                customer_profit_per_piece: price.customer_profit_per_piece,
                customer_profit_total_at_start_qty: profit_total,
            }
        })
        .collect();

    CustomerView {
        baseline: pricing.customer_price_baseline,
        markup_pct: pricing.customer_markup_pct,
        tiers: customer_tiers,
    }
}
