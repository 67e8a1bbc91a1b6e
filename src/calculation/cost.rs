//! True cost calculation functionality.
//!
//! This module computes the fully loaded cost of producing a quantity:
//! material sheets, blank goods when the shop supplies them, and labor. The
//! same function prices the active quantity and every tier start quantity,
//! so it must stay deterministic and side-effect-free.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{BlankSupplier, CostBreakdown, QuoteType};

use super::rounding::round_to_cents;

/// Cost inputs with every default already resolved.
///
/// Built once per quote; the tier loop reuses it unchanged at each start
/// quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostParams {
    /// The kind of quote being priced.
    pub quote_type: QuoteType,
    /// Patches per sheet after waste.
    pub effective_yield: Decimal,
    /// Cost of one material sheet in dollars.
    pub sheet_cost: Decimal,
    /// Shop hourly labor rate in dollars.
    pub hourly_rate: Decimal,
    /// Machine minutes to run one sheet.
    pub machine_minutes_per_sheet: Decimal,
    /// Cleanup minutes per sheet.
    pub cleanup_minutes_per_sheet: Decimal,
    /// Minutes to apply one patch to one hat.
    pub apply_minutes_per_hat: Decimal,
    /// Proof minutes, once per order.
    pub proof_minutes: Decimal,
    /// Setup minutes, once per order.
    pub setup_minutes: Decimal,
    /// Packing minutes, once per order.
    pub packing_minutes: Decimal,
    /// Who supplies the blank goods.
    pub blanks_supplied_by: BlankSupplier,
    /// Unit cost of a blank when the shop supplies them.
    pub blank_unit_cost: Decimal,
}

/// Computes the true cost of producing `qty` pieces.
///
/// Sheets are a ceiling division of quantity by effective yield. Blank cost
/// applies only when the quote is patch-press and the shop supplies the
/// blanks. Application labor applies only to patch-press quotes; a
/// patch-only order never touches a heat press. Proof, setup, and packing
/// minutes are counted once per order, not per piece; they amortize into
/// the per-piece figure through the division by quantity.
///
/// Each cost component is rounded to cents, so the total is exactly the sum
/// of its parts.
///
/// # Arguments
///
/// * `qty` - The quantity to price; must be at least 1
/// * `params` - Resolved cost inputs
///
/// # Returns
///
/// Returns a [`CostBreakdown`], or `InvalidJobInput` for a zero quantity.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::{CostParams, calculate_cost_at_qty};
/// use quotekit_engine::models::{BlankSupplier, QuoteType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let params = CostParams {
///     quote_type: QuoteType::PatchPress,
///     effective_yield: dec("33.25"),
///     sheet_cost: dec("7.00"),
///     hourly_rate: dec("76.98"),
///     machine_minutes_per_sheet: dec("12"),
///     cleanup_minutes_per_sheet: dec("5"),
///     apply_minutes_per_hat: dec("2"),
///     proof_minutes: dec("5"),
///     setup_minutes: dec("5"),
///     packing_minutes: dec("5"),
///     blanks_supplied_by: BlankSupplier::Customer,
///     blank_unit_cost: Decimal::ZERO,
/// };
///
/// let breakdown = calculate_cost_at_qty(144, &params).unwrap();
/// assert_eq!(breakdown.sheets, 5);
/// assert_eq!(breakdown.cost_per_piece, dec("3.70"));
/// ```
pub fn calculate_cost_at_qty(qty: u32, params: &CostParams) -> EngineResult<CostBreakdown> {
    if qty == 0 {
        return Err(EngineError::InvalidJobInput {
            field: "qty".to_string(),
            message: "quantity must be at least 1".to_string(),
        });
    }
    if params.effective_yield <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: "effective yield must be positive".to_string(),
        });
    }

    let qty_dec = Decimal::from(qty);

    let sheets = (qty_dec / params.effective_yield)
        .ceil()
        .to_u64()
        .ok_or_else(|| EngineError::CalculationError {
            message: "sheet count out of range".to_string(),
        })?;
    let sheets_dec = Decimal::from(sheets);

    let material_cost = round_to_cents(sheets_dec * params.sheet_cost);

    let blank_cost = if params.quote_type == QuoteType::PatchPress
        && params.blanks_supplied_by == BlankSupplier::Us
    {
        round_to_cents(qty_dec * params.blank_unit_cost)
    } else {
        round_to_cents(Decimal::ZERO)
    };

    let sheet_minutes =
        (params.machine_minutes_per_sheet + params.cleanup_minutes_per_sheet) * sheets_dec;
    let apply_minutes = match params.quote_type {
        QuoteType::PatchPress => params.apply_minutes_per_hat * qty_dec,
        QuoteType::PatchOnly => Decimal::ZERO,
    };
    let fixed_minutes = params.proof_minutes + params.setup_minutes + params.packing_minutes;
    let total_minutes = sheet_minutes + apply_minutes + fixed_minutes;

    let labor_cost = round_to_cents(total_minutes * params.hourly_rate / Decimal::from(60));

    let total_cost = material_cost + blank_cost + labor_cost;
    let cost_per_piece = round_to_cents(total_cost / qty_dec);

    Ok(CostBreakdown {
        qty,
        effective_yield: round_to_cents(params.effective_yield),
        sheets,
        material_cost,
        blank_cost,
        total_minutes: round_to_cents(total_minutes),
        labor_cost,
        total_cost,
        cost_per_piece,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_params() -> CostParams {
        CostParams {
            quote_type: QuoteType::PatchPress,
            effective_yield: dec("33.25"),
            sheet_cost: dec("7.00"),
            hourly_rate: dec("76.98"),
            machine_minutes_per_sheet: dec("12"),
            cleanup_minutes_per_sheet: dec("5"),
            apply_minutes_per_hat: dec("2"),
            proof_minutes: dec("5"),
            setup_minutes: dec("5"),
            packing_minutes: dec("5"),
            blanks_supplied_by: BlankSupplier::Customer,
            blank_unit_cost: Decimal::ZERO,
        }
    }

    /// CE-001: canonical 144-piece patch-press order
    #[test]
    fn test_cost_at_144() {
        let breakdown = calculate_cost_at_qty(144, &standard_params()).unwrap();

        assert_eq!(breakdown.sheets, 5);
        assert_eq!(breakdown.material_cost, dec("35.00"));
        assert_eq!(breakdown.blank_cost, dec("0.00"));
        // 5 sheets x 17 min + 144 hats x 2 min + 15 fixed = 388 minutes
        assert_eq!(breakdown.total_minutes, dec("388.00"));
        assert_eq!(breakdown.labor_cost, dec("497.80"));
        assert_eq!(breakdown.total_cost, dec("532.80"));
        assert_eq!(breakdown.cost_per_piece, dec("3.70"));
    }

    /// CE-002: total is exactly the sum of its components
    #[test]
    fn test_total_is_sum_of_components() {
        for qty in [1, 24, 48, 96, 144, 288, 576] {
            let b = calculate_cost_at_qty(qty, &standard_params()).unwrap();
            assert_eq!(b.total_cost, b.material_cost + b.blank_cost + b.labor_cost);
        }
    }

    /// CE-003: fixed minutes amortize, so bigger orders cost less per piece
    #[test]
    fn test_per_piece_cost_drops_from_24_to_144() {
        let at_24 = calculate_cost_at_qty(24, &standard_params()).unwrap();
        let at_144 = calculate_cost_at_qty(144, &standard_params()).unwrap();

        assert_eq!(at_24.cost_per_piece, dec("4.57"));
        assert!(at_144.cost_per_piece < at_24.cost_per_piece);
    }

    /// CE-004: shop-supplied blanks are charged through on patch-press
    #[test]
    fn test_blank_cost_when_shop_supplies() {
        let mut params = standard_params();
        params.blanks_supplied_by = BlankSupplier::Us;
        params.blank_unit_cost = dec("4.50");

        let breakdown = calculate_cost_at_qty(24, &params).unwrap();

        assert_eq!(breakdown.blank_cost, dec("108.00"));
        assert_eq!(
            breakdown.total_cost,
            breakdown.material_cost + breakdown.blank_cost + breakdown.labor_cost
        );
    }

    /// CE-005: customer-supplied blanks cost the shop nothing
    #[test]
    fn test_no_blank_cost_when_customer_supplies() {
        let mut params = standard_params();
        params.blank_unit_cost = dec("4.50");

        let breakdown = calculate_cost_at_qty(24, &params).unwrap();
        assert_eq!(breakdown.blank_cost, dec("0.00"));
    }

    /// CE-006: patch-only orders never pay blank cost or apply labor
    #[test]
    fn test_patch_only_skips_blanks_and_application() {
        let mut params = standard_params();
        params.quote_type = QuoteType::PatchOnly;
        params.blanks_supplied_by = BlankSupplier::Us;
        params.blank_unit_cost = dec("4.50");

        let breakdown = calculate_cost_at_qty(144, &params).unwrap();

        assert_eq!(breakdown.blank_cost, dec("0.00"));
        // 5 sheets x 17 min + 15 fixed = 100 minutes, no apply component
        assert_eq!(breakdown.total_minutes, dec("100.00"));
    }

    /// CE-007: zero quantity is a caller contract violation
    #[test]
    fn test_zero_qty_is_error() {
        let result = calculate_cost_at_qty(0, &standard_params());
        match result.unwrap_err() {
            EngineError::InvalidJobInput { field, .. } => assert_eq!(field, "qty"),
            other => panic!("Expected InvalidJobInput, got {:?}", other),
        }
    }

    /// CE-008: sheets use ceiling division
    #[test]
    fn test_sheets_round_up() {
        let mut params = standard_params();
        params.effective_yield = dec("10");

        assert_eq!(calculate_cost_at_qty(10, &params).unwrap().sheets, 1);
        assert_eq!(calculate_cost_at_qty(11, &params).unwrap().sheets, 2);
        assert_eq!(calculate_cost_at_qty(20, &params).unwrap().sheets, 2);
    }

    /// CE-009: a zero shop rate prices labor at nothing
    #[test]
    fn test_zero_rate_zero_labor() {
        let mut params = standard_params();
        params.hourly_rate = Decimal::ZERO;

        let breakdown = calculate_cost_at_qty(144, &params).unwrap();
        assert_eq!(breakdown.labor_cost, dec("0.00"));
        assert_eq!(breakdown.total_cost, breakdown.material_cost);
    }

    /// CE-010: identical inputs produce identical breakdowns
    #[test]
    fn test_deterministic() {
        let a = calculate_cost_at_qty(97, &standard_params()).unwrap();
        let b = calculate_cost_at_qty(97, &standard_params()).unwrap();
        assert_eq!(a, b);
    }
}
