//! Configuration types for the quoting engine.
//!
//! This module contains the strongly-typed shop configuration deserialized
//! from YAML. Every field has an explicit default, so a partial file (or an
//! empty one) still resolves to a complete, usable configuration. Default
//! resolution happens here, once, never inside the calculation code.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{PriceBaseline, QuoteType};

fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

/// How the cost-based wholesale price is derived from cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMethod {
    /// Wholesale is cost times (1 + markup%).
    #[default]
    Markup,
    /// Wholesale is cost divided by (1 - margin%), margin capped below 100%.
    Margin,
}

/// Shop capacity and monthly financial targets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapacitySettings {
    /// Hours available for work per week.
    #[serde(default = "default_workable_hours")]
    pub workable_hours_per_week: Decimal,
    /// Percentage of workable hours that is billable.
    #[serde(default = "default_billable_efficiency")]
    pub billable_efficiency_pct: Decimal,
    /// Monthly overhead in dollars.
    #[serde(default = "default_monthly_overhead")]
    pub monthly_overhead: Decimal,
    /// Monthly owner-pay goal in dollars.
    #[serde(default = "default_owner_pay_goal")]
    pub monthly_owner_pay_goal: Decimal,
    /// Monthly profit goal in dollars.
    #[serde(default = "default_profit_goal")]
    pub monthly_profit_goal: Decimal,
}

fn default_workable_hours() -> Decimal {
    Decimal::from(40)
}
fn default_billable_efficiency() -> Decimal {
    Decimal::from(75)
}
fn default_monthly_overhead() -> Decimal {
    Decimal::from(3000)
}
fn default_owner_pay_goal() -> Decimal {
    Decimal::from(5000)
}
fn default_profit_goal() -> Decimal {
    Decimal::from(2000)
}

impl Default for CapacitySettings {
    fn default() -> Self {
        Self {
            workable_hours_per_week: default_workable_hours(),
            billable_efficiency_pct: default_billable_efficiency(),
            monthly_overhead: default_monthly_overhead(),
            monthly_owner_pay_goal: default_owner_pay_goal(),
            monthly_profit_goal: default_profit_goal(),
        }
    }
}

/// Shop-wide default minutes for the labor components of a job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeDefaults {
    /// Machine minutes to run one sheet.
    #[serde(default = "default_machine_minutes")]
    pub machine_minutes_per_sheet: Decimal,
    /// Cleanup minutes per sheet.
    #[serde(default = "default_cleanup_minutes")]
    pub cleanup_minutes_per_sheet: Decimal,
    /// Minutes to apply one patch to one hat.
    #[serde(default = "default_apply_minutes")]
    pub apply_minutes_per_hat: Decimal,
    /// Proof minutes, once per order.
    #[serde(default = "default_fixed_minutes")]
    pub proof_minutes: Decimal,
    /// Setup minutes, once per order.
    #[serde(default = "default_fixed_minutes")]
    pub setup_minutes: Decimal,
    /// Packing minutes, once per order.
    #[serde(default = "default_fixed_minutes")]
    pub packing_minutes: Decimal,
}

fn default_machine_minutes() -> Decimal {
    Decimal::from(12)
}
fn default_cleanup_minutes() -> Decimal {
    Decimal::from(5)
}
fn default_apply_minutes() -> Decimal {
    Decimal::from(2)
}
fn default_fixed_minutes() -> Decimal {
    Decimal::from(5)
}

impl Default for TimeDefaults {
    fn default() -> Self {
        Self {
            machine_minutes_per_sheet: default_machine_minutes(),
            cleanup_minutes_per_sheet: default_cleanup_minutes(),
            apply_minutes_per_hat: default_apply_minutes(),
            proof_minutes: default_fixed_minutes(),
            setup_minutes: default_fixed_minutes(),
            packing_minutes: default_fixed_minutes(),
        }
    }
}

/// Shop-wide sheet layout defaults, all in inches except the waste
/// percentage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutDefaults {
    /// Gap between adjacent patches.
    #[serde(default = "default_gap")]
    pub gap: Decimal,
    /// Unusable border on each sheet edge.
    #[serde(default = "default_border")]
    pub border: Decimal,
    /// Expected waste percentage.
    #[serde(default = "default_waste_pct")]
    pub waste_pct: Decimal,
    /// Outline allowance added per axis in art size mode.
    #[serde(default = "default_outline_allowance")]
    pub outline_allowance: Decimal,
}

fn default_gap() -> Decimal {
    dec(625, 4)
}
fn default_border() -> Decimal {
    dec(25, 2)
}
fn default_waste_pct() -> Decimal {
    Decimal::from(5)
}
fn default_outline_allowance() -> Decimal {
    dec(125, 3)
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            border: default_border(),
            waste_pct: default_waste_pct(),
            outline_allowance: default_outline_allowance(),
        }
    }
}

/// Pricing strategy settings: wholesale derivation, setup fee, ladder, and
/// the customer pass-through view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingSettings {
    /// How wholesale is derived from cost.
    #[serde(default)]
    pub method: PricingMethod,
    /// Markup percentage for the markup method.
    #[serde(default = "default_markup_pct")]
    pub markup_pct: Decimal,
    /// Margin percentage for the margin method.
    #[serde(default = "default_margin_pct")]
    pub margin_pct: Decimal,
    /// Flat setup fee in dollars.
    #[serde(default = "default_setup_fee")]
    pub setup_fee: Decimal,
    /// Quantity at and above which the setup fee is waived.
    #[serde(default = "default_setup_waive_qty")]
    pub setup_waive_qty: u32,
    /// Minimum decrease between adjacent tier prices when sanitizing a
    /// ladder that is not strictly decreasing.
    #[serde(default = "default_min_tier_step_down")]
    pub min_tier_step_down: Decimal,
    /// Minimum profit kept above cost when clamping a tier price down.
    #[serde(default = "default_min_profit_floor")]
    pub min_profit_floor: Decimal,
    /// Customer pass-through markup percentage.
    #[serde(default = "Decimal::default")]
    pub customer_markup_pct: Decimal,
    /// The price the pass-through markup is applied to.
    #[serde(default)]
    pub customer_price_baseline: PriceBaseline,
    /// Published per-tier prices for patch-press quotes, keyed by tier key.
    #[serde(default)]
    pub published_ladder_patch_press: Option<HashMap<String, Decimal>>,
    /// Published per-tier prices for patch-only quotes, keyed by tier key.
    #[serde(default)]
    pub published_ladder_patch_only: Option<HashMap<String, Decimal>>,
}

fn default_markup_pct() -> Decimal {
    Decimal::from(50)
}
fn default_margin_pct() -> Decimal {
    Decimal::from(40)
}
fn default_setup_fee() -> Decimal {
    Decimal::from(30)
}
fn default_setup_waive_qty() -> u32 {
    24
}
fn default_min_tier_step_down() -> Decimal {
    dec(5, 2)
}
fn default_min_profit_floor() -> Decimal {
    dec(10, 2)
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            method: PricingMethod::default(),
            markup_pct: default_markup_pct(),
            margin_pct: default_margin_pct(),
            setup_fee: default_setup_fee(),
            setup_waive_qty: default_setup_waive_qty(),
            min_tier_step_down: default_min_tier_step_down(),
            min_profit_floor: default_min_profit_floor(),
            customer_markup_pct: Decimal::ZERO,
            customer_price_baseline: PriceBaseline::default(),
            published_ladder_patch_press: None,
            published_ladder_patch_only: None,
        }
    }
}

impl PricingSettings {
    /// Returns the configured published ladder for a quote type, if any.
    pub fn published_ladder(&self, quote_type: QuoteType) -> Option<&HashMap<String, Decimal>> {
        match quote_type {
            QuoteType::PatchPress => self.published_ladder_patch_press.as_ref(),
            QuoteType::PatchOnly => self.published_ladder_patch_only.as_ref(),
        }
    }
}

/// Profit-first allocation percentages for splitting revenue into buckets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfitFirstSettings {
    /// Percentage allocated to profit.
    #[serde(default = "default_profit_pct")]
    pub profit_pct: Decimal,
    /// Percentage allocated to tax.
    #[serde(default = "default_tax_pct")]
    pub tax_pct: Decimal,
    /// Percentage allocated to owner pay.
    #[serde(default = "default_owner_pay_pct")]
    pub owner_pay_pct: Decimal,
    /// Percentage allocated to operating expenses.
    #[serde(default = "default_ops_pct")]
    pub ops_pct: Decimal,
    /// Percentage allocated to the buffer account.
    #[serde(default = "default_buffer_pct")]
    pub buffer_pct: Decimal,
}

fn default_profit_pct() -> Decimal {
    Decimal::from(5)
}
fn default_tax_pct() -> Decimal {
    Decimal::from(15)
}
fn default_owner_pay_pct() -> Decimal {
    Decimal::from(50)
}
fn default_ops_pct() -> Decimal {
    Decimal::from(25)
}
fn default_buffer_pct() -> Decimal {
    Decimal::from(5)
}

impl Default for ProfitFirstSettings {
    fn default() -> Self {
        Self {
            profit_pct: default_profit_pct(),
            tax_pct: default_tax_pct(),
            owner_pay_pct: default_owner_pay_pct(),
            ops_pct: default_ops_pct(),
            buffer_pct: default_buffer_pct(),
        }
    }
}

/// The complete shop configuration loaded from `shop.yaml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ShopConfiguration {
    /// Capacity and monthly financial targets.
    #[serde(default)]
    pub capacity: CapacitySettings,
    /// Default minutes for the labor components of a job.
    #[serde(default)]
    pub time_defaults: TimeDefaults,
    /// Default sheet layout parameters.
    #[serde(default)]
    pub layout_defaults: LayoutDefaults,
    /// Pricing strategy settings.
    #[serde(default)]
    pub pricing: PricingSettings,
    /// Profit-first allocation percentages.
    #[serde(default)]
    pub profit_first: ProfitFirstSettings,
}
