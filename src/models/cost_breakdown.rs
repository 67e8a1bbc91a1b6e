//! Cost breakdown model.
//!
//! A [`CostBreakdown`] captures the fully loaded cost of producing a specific
//! quantity: material, blanks, and labor, with the per-piece figure derived
//! from the total. One is computed for the active quantity and one for each
//! tier's start quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The true cost of producing a specific quantity.
///
/// Invariant: `total_cost` is exactly `material_cost + blank_cost +
/// labor_cost`. Each component is rounded to cents before summing, so the
/// total never drifts from its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The quantity this breakdown was computed for.
    pub qty: u32,
    /// Effective patches per sheet after waste, as used for sheet count.
    pub effective_yield: Decimal,
    /// Whole sheets of material required.
    pub sheets: u64,
    /// Material cost in dollars (sheets times sheet cost).
    pub material_cost: Decimal,
    /// Blank goods cost in dollars; zero unless the shop supplies blanks for
    /// a patch-press job.
    pub blank_cost: Decimal,
    /// Total labor minutes: per-sheet processing, per-piece application, and
    /// the once-per-order fixed minutes.
    pub total_minutes: Decimal,
    /// Labor cost in dollars (minutes converted through the shop hourly rate).
    pub labor_cost: Decimal,
    /// Total cost in dollars.
    pub total_cost: Decimal,
    /// Per-piece cost in dollars (total divided by quantity).
    pub cost_per_piece: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> CostBreakdown {
        CostBreakdown {
            qty: 144,
            effective_yield: dec("33.25"),
            sheets: 5,
            material_cost: dec("35.00"),
            blank_cost: dec("0.00"),
            total_minutes: dec("388.00"),
            labor_cost: dec("497.80"),
            total_cost: dec("532.80"),
            cost_per_piece: dec("3.70"),
        }
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let b = sample_breakdown();
        assert_eq!(b.total_cost, b.material_cost + b.blank_cost + b.labor_cost);
    }

    #[test]
    fn test_serialization_uses_string_decimals() {
        let b = sample_breakdown();
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"qty\":144"));
        assert!(json.contains("\"sheets\":5"));
        assert!(json.contains("\"material_cost\":\"35.00\""));
        assert!(json.contains("\"cost_per_piece\":\"3.70\""));
    }

    #[test]
    fn test_deserialization_round_trip() {
        let b = sample_breakdown();
        let json = serde_json::to_string(&b).unwrap();
        let back: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
