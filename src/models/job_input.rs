//! Job input model and related types.
//!
//! A [`JobInput`] is everything the caller supplies for one pricing request:
//! what kind of quote it is, how many pieces, the patch geometry, and any
//! per-job overrides of the shop defaults. Optional fields resolve against
//! the shop configuration and selected material exactly once, before any
//! calculation runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of quote being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteType {
    /// Patches produced and pressed onto headwear.
    #[default]
    PatchPress,
    /// Patches produced and shipped loose, no application.
    PatchOnly,
}

impl QuoteType {
    /// Returns the singular unit label used in quote copy.
    pub fn unit_label(&self) -> &'static str {
        match self {
            QuoteType::PatchPress => "hat",
            QuoteType::PatchOnly => "patch",
        }
    }

    /// Returns the plural unit label used in quote copy.
    pub fn unit_label_plural(&self) -> &'static str {
        match self {
            QuoteType::PatchPress => "hats",
            QuoteType::PatchOnly => "patches",
        }
    }
}

/// How the supplied patch dimensions should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Dimensions already include bleed; use them as-is.
    #[default]
    Overall,
    /// Dimensions are artwork size; add the outline allowance per axis.
    Art,
}

/// How patches-per-sheet yield is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldMethod {
    /// Compute yield from sheet and patch geometry, trying both orientations.
    #[default]
    Auto,
    /// Use the caller-supplied patches-per-sheet count.
    Manual,
}

/// Who supplies the blank goods (hats) for a patch-press job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankSupplier {
    /// The customer ships their own blanks; no blank cost to the shop.
    #[default]
    Customer,
    /// The shop buys the blanks and charges their unit cost through.
    Us,
}

impl BlankSupplier {
    /// Returns the label used in quote copy ("customer hats" / "us hats").
    pub fn label(&self) -> &'static str {
        match self {
            BlankSupplier::Customer => "customer",
            BlankSupplier::Us => "us",
        }
    }
}

/// Caller-supplied parameters for one pricing request.
///
/// `None` means "use the shop or material default"; the engine resolves all
/// defaults up front rather than scattering fallbacks through the math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
    /// The kind of quote being priced.
    #[serde(default)]
    pub quote_type: QuoteType,
    /// Target quantity. Must be at least 1.
    pub qty: u32,
    /// Patch width in inches.
    pub patch_width: Decimal,
    /// Patch height in inches.
    pub patch_height: Decimal,
    /// How the patch dimensions should be interpreted.
    #[serde(default)]
    pub size_mode: SizeMode,
    /// Outline allowance override in inches (art mode only).
    #[serde(default)]
    pub outline_allowance: Option<Decimal>,
    /// Gap between patches override in inches.
    #[serde(default)]
    pub gap: Option<Decimal>,
    /// Sheet border override in inches.
    #[serde(default)]
    pub border: Option<Decimal>,
    /// Waste percentage override.
    #[serde(default)]
    pub waste_pct: Option<Decimal>,
    /// How patches-per-sheet is determined.
    #[serde(default)]
    pub yield_method: YieldMethod,
    /// Explicit patches-per-sheet when `yield_method` is manual. Must be at
    /// least 1.
    #[serde(default)]
    pub manual_yield: Option<u32>,
    /// Who supplies the blank goods for a patch-press job.
    #[serde(default)]
    pub blanks_supplied_by: BlankSupplier,
    /// Unit cost of a blank when the shop supplies them.
    #[serde(default)]
    pub blank_unit_cost: Option<Decimal>,
    /// Machine minutes per sheet override.
    #[serde(default)]
    pub machine_minutes_per_sheet: Option<Decimal>,
    /// Cleanup minutes per sheet override.
    #[serde(default)]
    pub cleanup_minutes_per_sheet: Option<Decimal>,
    /// Application minutes per hat override.
    #[serde(default)]
    pub apply_minutes_per_hat: Option<Decimal>,
    /// Proof minutes override (once per order).
    #[serde(default)]
    pub proof_minutes: Option<Decimal>,
    /// Setup minutes override (once per order).
    #[serde(default)]
    pub setup_minutes: Option<Decimal>,
    /// Packing minutes override (once per order).
    #[serde(default)]
    pub packing_minutes: Option<Decimal>,
    /// Turnaround text to embed in quote copy.
    #[serde(default)]
    pub turnaround_text: Option<String>,
}
