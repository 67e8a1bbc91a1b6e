//! Sheet yield calculation functionality.
//!
//! This module computes how many patches fit on one material sheet. Auto
//! yield lays a rectangular grid inside the sheet's usable area, trying the
//! patch both as given and rotated 90 degrees, and keeps the better packing.
//! A waste percentage then discounts the geometric yield to the effective
//! yield used for sheet counts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{MaterialSheet, SizeMode, YieldMethod};

/// The smallest effective yield the calculator will report.
///
/// Keeps downstream division defined at 100% waste; deliberately far below
/// any realistic yield so it never masks a real value.
fn min_effective_yield() -> Decimal {
    Decimal::new(1, 4)
}

/// Geometry and method inputs for a yield calculation, already resolved
/// against shop defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldParams {
    /// Patch width in inches.
    pub patch_width: Decimal,
    /// Patch height in inches.
    pub patch_height: Decimal,
    /// How the patch dimensions should be interpreted.
    pub size_mode: SizeMode,
    /// Outline allowance added per axis in art mode.
    pub outline_allowance: Decimal,
    /// Gap between adjacent patches in inches.
    pub gap: Decimal,
    /// Unusable border on each sheet edge in inches.
    pub border: Decimal,
    /// Waste percentage discounting the geometric yield.
    pub waste_pct: Decimal,
    /// How patches-per-sheet is determined.
    pub yield_method: YieldMethod,
    /// Explicit patches-per-sheet for the manual method.
    pub manual_yield: Option<u32>,
}

/// The result of a yield calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldResult {
    /// Whole patches per sheet from the better orientation (or the manual
    /// value), at least 1.
    pub best_yield: u32,
    /// Patches per sheet after the waste discount; always positive.
    pub effective_yield: Decimal,
}

/// Counts whole patches along one axis: how many `patch + gap` strides fit
/// in `usable + gap` (the final patch needs no trailing gap).
fn grid_count(usable: Decimal, patch: Decimal, gap: Decimal) -> u64 {
    let denominator = patch + gap;
    if denominator <= Decimal::ZERO {
        return 0;
    }
    ((usable + gap) / denominator)
        .floor()
        .to_i64()
        .map_or(0, |count| count.max(0) as u64)
}

/// Computes patches per sheet for a job.
///
/// In art size mode the outline allowance is added once per axis; overall
/// mode uses the dimensions as given (bleed already included). The auto
/// method grids the usable sheet area (sheet minus twice the border per
/// axis) in both orientations and keeps the better one, floored at 1; it
/// never reports more patches than whole-number tiling supports. The manual
/// method trusts the supplied count.
///
/// Effective yield applies the waste percentage to the best yield and is
/// clamped to a small positive value so a 100% waste entry cannot produce a
/// division by zero downstream.
///
/// # Arguments
///
/// * `material` - The sheet being cut
/// * `params` - Resolved geometry and method inputs
///
/// # Returns
///
/// Returns a `YieldResult`, or `InvalidJobInput` if a patch dimension is not
/// positive or the manual method is selected without a usable count.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::{calculate_yield, YieldParams};
/// use quotekit_engine::models::{MaterialSheet, SizeMode, YieldMethod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let material = MaterialSheet {
///     id: "leatherette".to_string(),
///     name: "Leatherette".to_string(),
///     sheet_width: Decimal::from(12),
///     sheet_height: Decimal::from(24),
///     sheet_cost: Decimal::from(7),
///     machine_minutes_per_sheet: None,
///     cleanup_minutes_per_sheet: None,
/// };
/// let params = YieldParams {
///     patch_width: Decimal::from_str("3.25").unwrap(),
///     patch_height: Decimal::from_str("2.25").unwrap(),
///     size_mode: SizeMode::Overall,
///     outline_allowance: Decimal::from_str("0.125").unwrap(),
///     gap: Decimal::from_str("0.0625").unwrap(),
///     border: Decimal::from_str("0.25").unwrap(),
///     waste_pct: Decimal::ZERO,
///     yield_method: YieldMethod::Auto,
///     manual_yield: None,
/// };
///
/// let result = calculate_yield(&material, &params).unwrap();
/// assert_eq!(result.best_yield, 35);
/// ```
pub fn calculate_yield(material: &MaterialSheet, params: &YieldParams) -> EngineResult<YieldResult> {
    if params.patch_width <= Decimal::ZERO {
        return Err(EngineError::InvalidJobInput {
            field: "patch_width".to_string(),
            message: "patch width must be positive".to_string(),
        });
    }
    if params.patch_height <= Decimal::ZERO {
        return Err(EngineError::InvalidJobInput {
            field: "patch_height".to_string(),
            message: "patch height must be positive".to_string(),
        });
    }

    let best_yield = match params.yield_method {
        YieldMethod::Manual => match params.manual_yield {
            Some(count) if count >= 1 => count,
            _ => {
                return Err(EngineError::InvalidJobInput {
                    field: "manual_yield".to_string(),
                    message: "manual yield must be at least 1".to_string(),
                });
            }
        },
        YieldMethod::Auto => {
            // Overall footprint of one patch on the sheet
            let (patch_w, patch_h) = match params.size_mode {
                SizeMode::Art => (
                    params.patch_width + params.outline_allowance,
                    params.patch_height + params.outline_allowance,
                ),
                SizeMode::Overall => (params.patch_width, params.patch_height),
            };

            let two = Decimal::from(2);
            let usable_w = material.sheet_width - two * params.border;
            let usable_h = material.sheet_height - two * params.border;

            let yield_normal = grid_count(usable_w, patch_w, params.gap)
                * grid_count(usable_h, patch_h, params.gap);
            let yield_rotated = grid_count(usable_w, patch_h, params.gap)
                * grid_count(usable_h, patch_w, params.gap);

            yield_normal
                .max(yield_rotated)
                .max(1)
                .try_into()
                .unwrap_or(u32::MAX)
        }
    };

    let waste_fraction = params.waste_pct / Decimal::from(100);
    let effective_yield = Decimal::from(best_yield) * (Decimal::ONE - waste_fraction);
    let effective_yield = if effective_yield > Decimal::ZERO {
        effective_yield
    } else {
        min_effective_yield()
    };

    Ok(YieldResult {
        best_yield,
        effective_yield,
    })
}
