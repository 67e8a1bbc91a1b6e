//! Quote orchestration functionality.
//!
//! [`compute_quote`] is the engine's single entry point: it resolves every
//! default once, then runs shop rate → yield → cost → tier matrix →
//! customer view → scripts, producing a complete [`PricingResult`]. It is a
//! pure function of its three inputs: no clock, no I/O, no hidden state.

use rust_decimal::Decimal;

use crate::config::ShopConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{ActivePricing, JobInput, MaterialSheet, PricingResult};

use super::cost::{CostParams, calculate_cost_at_qty};
use super::customer::build_customer_view;
use super::rounding::round_to_cents;
use super::scripts::{ScriptParams, build_upsell, generate_quote_scripts, tier_pricing_text, tier_summary};
use super::sheet_yield::{YieldParams, calculate_yield};
use super::shop_rate::calculate_shop_rate;
use super::tiers::build_tier_table;
use super::wholesale::calculate_wholesale;

/// Turnaround quoted when the job does not specify one.
const DEFAULT_TURNAROUND: &str = "5–7 business days";

/// Computes a complete quote.
///
/// Identical inputs always produce an identical result; callers may cache at
/// this boundary if they care to, the engine never does.
///
/// # Arguments
///
/// * `job` - The caller-supplied job parameters
/// * `shop` - The shop configuration (capacity, defaults, pricing)
/// * `material` - The selected material sheet
///
/// # Returns
///
/// Returns a [`PricingResult`], or `InvalidJobInput` when the quantity is
/// zero, a patch dimension is not positive, or a manual yield is missing or
/// zero.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::compute_quote;
/// use quotekit_engine::config::ShopConfiguration;
/// use quotekit_engine::models::{JobInput, MaterialSheet, QuoteType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let shop = ShopConfiguration::default();
/// let material = MaterialSheet {
///     id: "leatherette".to_string(),
///     name: "Leatherette".to_string(),
///     sheet_width: dec("12"),
///     sheet_height: dec("24"),
///     sheet_cost: dec("7.00"),
///     machine_minutes_per_sheet: None,
///     cleanup_minutes_per_sheet: None,
/// };
/// let job = JobInput {
///     quote_type: QuoteType::PatchPress,
///     qty: 144,
///     patch_width: dec("3.25"),
///     patch_height: dec("2.25"),
///     size_mode: Default::default(),
///     outline_allowance: None,
///     gap: None,
///     border: None,
///     waste_pct: None,
///     yield_method: Default::default(),
///     manual_yield: None,
///     blanks_supplied_by: Default::default(),
///     blank_unit_cost: None,
///     machine_minutes_per_sheet: None,
///     cleanup_minutes_per_sheet: None,
///     apply_minutes_per_hat: None,
///     proof_minutes: None,
///     setup_minutes: None,
///     packing_minutes: None,
///     turnaround_text: None,
/// };
///
/// let result = compute_quote(&job, &shop, &material).unwrap();
/// assert_eq!(result.active.unit_price, dec("9.50"));
/// assert_eq!(result.best_yield, 35);
/// ```
pub fn compute_quote(
    job: &JobInput,
    shop: &ShopConfiguration,
    material: &MaterialSheet,
) -> EngineResult<PricingResult> {
    if job.qty == 0 {
        return Err(EngineError::InvalidJobInput {
            field: "qty".to_string(),
            message: "quantity must be at least 1".to_string(),
        });
    }

    let rate = calculate_shop_rate(&shop.capacity);

    let layout = &shop.layout_defaults;
    let yield_result = calculate_yield(
        material,
        &YieldParams {
            patch_width: job.patch_width,
            patch_height: job.patch_height,
            size_mode: job.size_mode,
            outline_allowance: job.outline_allowance.unwrap_or(layout.outline_allowance),
            gap: job.gap.unwrap_or(layout.gap),
            border: job.border.unwrap_or(layout.border),
            waste_pct: job.waste_pct.unwrap_or(layout.waste_pct),
            yield_method: job.yield_method,
            manual_yield: job.manual_yield,
        },
    )?;

    // Per-sheet times prefer the job override, then the material, then the
    // shop defaults; order-level times have no material component.
    let times = &shop.time_defaults;
    let cost_params = CostParams {
        quote_type: job.quote_type,
        effective_yield: yield_result.effective_yield,
        sheet_cost: material.sheet_cost,
        hourly_rate: rate.hourly_rate,
        machine_minutes_per_sheet: job
            .machine_minutes_per_sheet
            .or(material.machine_minutes_per_sheet)
            .unwrap_or(times.machine_minutes_per_sheet),
        cleanup_minutes_per_sheet: job
            .cleanup_minutes_per_sheet
            .or(material.cleanup_minutes_per_sheet)
            .unwrap_or(times.cleanup_minutes_per_sheet),
        apply_minutes_per_hat: job
            .apply_minutes_per_hat
            .unwrap_or(times.apply_minutes_per_hat),
        proof_minutes: job.proof_minutes.unwrap_or(times.proof_minutes),
        setup_minutes: job.setup_minutes.unwrap_or(times.setup_minutes),
        packing_minutes: job.packing_minutes.unwrap_or(times.packing_minutes),
        blanks_supplied_by: job.blanks_supplied_by,
        blank_unit_cost: job.blank_unit_cost.unwrap_or(Decimal::ZERO),
    };

    let breakdown = calculate_cost_at_qty(job.qty, &cost_params)?;
    let tiers = build_tier_table(job.qty, &cost_params, &shop.pricing)?;

    let active_tier = tiers
        .iter()
        .find(|tier| tier.is_active)
        .ok_or_else(|| EngineError::CalculationError {
            message: "no tier matched the requested quantity".to_string(),
        })?;

    let pricing = &shop.pricing;
    let unit_price = active_tier.published_per_piece;
    let profit_per_piece = round_to_cents(unit_price - breakdown.cost_per_piece);
    let margin_pct = if unit_price > Decimal::ZERO {
        round_to_cents(profit_per_piece / unit_price * Decimal::from(100))
    } else {
        round_to_cents(Decimal::ZERO)
    };
    let setup_fee_applied = if job.qty >= pricing.setup_waive_qty {
        round_to_cents(Decimal::ZERO)
    } else {
        round_to_cents(pricing.setup_fee)
    };
    let subtotal = round_to_cents(unit_price * Decimal::from(job.qty));
    let total = round_to_cents(subtotal + setup_fee_applied);

    let active = ActivePricing {
        qty: job.qty,
        tier_key: active_tier.key.clone(),
        unit_price,
        cost_per_piece: breakdown.cost_per_piece,
        wholesale_per_piece: calculate_wholesale(breakdown.cost_per_piece, pricing),
        profit_per_piece,
        margin_pct,
        setup_fee_applied,
        subtotal,
        total,
        breakdown,
    };

    let customer_view = build_customer_view(&tiers, pricing);

    let summary = tier_summary(&tiers);
    let turnaround = job.turnaround_text.as_deref().unwrap_or(DEFAULT_TURNAROUND);
    let scripts = generate_quote_scripts(&ScriptParams {
        qty: job.qty,
        quote_type: job.quote_type,
        blanks_supplied_by: job.blanks_supplied_by,
        material_name: &material.name,
        patch_width: job.patch_width,
        patch_height: job.patch_height,
        unit_price,
        total,
        tier_summary: &summary,
        turnaround,
    });

    let upsell = build_upsell(job.qty, unit_price, &tiers);
    let tier_text = tier_pricing_text(&tiers, job.quote_type);

    Ok(PricingResult {
        active,
        tiers,
        customer_view,
        scripts,
        upsell,
        tier_pricing_text: tier_text,
        shop_rate_per_hour: rate.hourly_rate,
        shop_rate_per_minute: rate.minute_rate,
        best_yield: yield_result.best_yield,
        effective_yield: round_to_cents(yield_result.effective_yield),
    })
}
