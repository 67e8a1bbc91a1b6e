//! Material sheet model.
//!
//! A material sheet is the stock patches are cut from: leatherette, woven
//! twill, sublimation blanks and so on. The engine only needs its physical
//! dimensions, cost, and default per-sheet processing times.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sheet of patch material as configured by the shop.
///
/// Per-sheet machine and cleanup minutes are optional here; when absent the
/// shop-wide time defaults apply. All dimensions are in inches.
///
/// # Example
///
/// ```
/// use quotekit_engine::models::MaterialSheet;
/// use rust_decimal::Decimal;
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
/// assert_eq!(material.name, "Leatherette");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSheet {
    /// Unique identifier for the material (e.g., "leatherette").
    pub id: String,
    /// The display name shown in quotes (e.g., "Leatherette").
    pub name: String,
    /// Sheet width in inches.
    pub sheet_width: Decimal,
    /// Sheet height in inches.
    pub sheet_height: Decimal,
    /// Cost of one sheet in dollars.
    pub sheet_cost: Decimal,
    /// Default machine minutes to run one sheet, if this material needs
    /// something other than the shop default.
    #[serde(default)]
    pub machine_minutes_per_sheet: Option<Decimal>,
    /// Default cleanup minutes per sheet, if different from the shop default.
    #[serde(default)]
    pub cleanup_minutes_per_sheet: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_material_from_yaml() {
        let yaml = r#"
id: leatherette
name: Leatherette
sheet_width: 12
sheet_height: 24
sheet_cost: 7.00
machine_minutes_per_sheet: 12
cleanup_minutes_per_sheet: 5
"#;

        let material: MaterialSheet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(material.id, "leatherette");
        assert_eq!(material.name, "Leatherette");
        assert_eq!(material.sheet_width, dec("12"));
        assert_eq!(material.sheet_height, dec("24"));
        assert_eq!(material.sheet_cost, dec("7.00"));
        assert_eq!(material.machine_minutes_per_sheet, Some(dec("12")));
        assert_eq!(material.cleanup_minutes_per_sheet, Some(dec("5")));
    }

    #[test]
    fn test_deserialize_material_without_time_overrides() {
        let yaml = r#"
id: twill
name: Woven Twill
sheet_width: 15
sheet_height: 30
sheet_cost: 9.50
"#;

        let material: MaterialSheet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(material.machine_minutes_per_sheet, None);
        assert_eq!(material.cleanup_minutes_per_sheet, None);
    }

    #[test]
    fn test_material_json_round_trip() {
        let material = MaterialSheet {
            id: "leatherette".to_string(),
            name: "Leatherette".to_string(),
            sheet_width: dec("12"),
            sheet_height: dec("24"),
            sheet_cost: dec("7.00"),
            machine_minutes_per_sheet: Some(dec("12")),
            cleanup_minutes_per_sheet: Some(dec("5")),
        };

        let json = serde_json::to_string(&material).unwrap();
        assert!(json.contains("\"sheet_cost\":\"7.00\""));

        let back: MaterialSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, material);
    }
}
