//! Core data models for the quoting engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_breakdown;
mod job_input;
mod legacy;
mod material;
mod pricing_result;

pub use cost_breakdown::CostBreakdown;
pub use job_input::{BlankSupplier, JobInput, QuoteType, SizeMode, YieldMethod};
pub use legacy::{LegacyQuote, LegacyTierPrice};
pub use material::MaterialSheet;
pub use pricing_result::{
    ActivePricing, CustomerTierEntry, CustomerView, PriceBaseline, PricingResult, QuoteScripts,
    TierEntry, Upsell,
};
