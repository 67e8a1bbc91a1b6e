//! Calculation logic for the quoting engine.
//!
//! This module contains all the calculation functions for pricing a job,
//! including shop rate derivation, sheet yield with rotation, true cost at a
//! quantity, wholesale and published price resolution, tier table
//! construction with ladder sanitization, customer pass-through pricing,
//! profit-first allocations, and quote script generation.

mod allocations;
mod cost;
mod customer;
mod published;
mod quote;
mod rounding;
mod scripts;
mod sheet_yield;
mod shop_rate;
mod tiers;
mod wholesale;

pub use allocations::{ProfitFirstAllocations, calculate_profit_first_allocations};
pub use cost::{CostParams, calculate_cost_at_qty};
pub use customer::{CustomerPriceResult, build_customer_view, calculate_customer_price};
pub use published::published_price;
pub use quote::compute_quote;
pub use rounding::{round_to_cents, round_to_nickel};
pub use scripts::{
    ScriptParams, build_upsell, format_money, format_pct, generate_quote_scripts,
    tier_pricing_text, tier_summary,
};
pub use sheet_yield::{YieldParams, YieldResult, calculate_yield};
pub use shop_rate::{ShopRateResult, calculate_shop_rate};
pub use tiers::{TIER_RANGES, TierRange, build_tier_table, tier_for_qty};
pub use wholesale::calculate_wholesale;
