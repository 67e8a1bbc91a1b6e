//! Request types for the quoting engine API.
//!
//! This module defines the JSON request structures for the `/quote`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BlankSupplier, JobInput, QuoteType, SizeMode, YieldMethod};

/// Request body for the `/quote` endpoint.
///
/// Names the material to price against and carries the job parameters; the
/// shop configuration comes from the server's loaded state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The id of the material to price against.
    pub material_id: String,
    /// The job parameters.
    pub job: JobInputRequest,
}

/// Job parameters in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInputRequest {
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
    /// Outline allowance override in inches.
    #[serde(default)]
    pub outline_allowance: Option<Decimal>,
    /// Gap override in inches.
    #[serde(default)]
    pub gap: Option<Decimal>,
    /// Border override in inches.
    #[serde(default)]
    pub border: Option<Decimal>,
    /// Waste percentage override.
    #[serde(default)]
    pub waste_pct: Option<Decimal>,
    /// How patches-per-sheet is determined.
    #[serde(default)]
    pub yield_method: YieldMethod,
    /// Explicit patches-per-sheet for the manual method.
    #[serde(default)]
    pub manual_yield: Option<u32>,
    /// Who supplies the blank goods.
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
    /// Proof minutes override.
    #[serde(default)]
    pub proof_minutes: Option<Decimal>,
    /// Setup minutes override.
    #[serde(default)]
    pub setup_minutes: Option<Decimal>,
    /// Packing minutes override.
    #[serde(default)]
    pub packing_minutes: Option<Decimal>,
    /// Turnaround text to embed in quote copy.
    #[serde(default)]
    pub turnaround_text: Option<String>,
}

impl From<JobInputRequest> for JobInput {
    fn from(req: JobInputRequest) -> Self {
        JobInput {
            quote_type: req.quote_type,
            qty: req.qty,
            patch_width: req.patch_width,
            patch_height: req.patch_height,
            size_mode: req.size_mode,
            outline_allowance: req.outline_allowance,
            gap: req.gap,
            border: req.border,
            waste_pct: req.waste_pct,
            yield_method: req.yield_method,
            manual_yield: req.manual_yield,
            blanks_supplied_by: req.blanks_supplied_by,
            blank_unit_cost: req.blank_unit_cost,
            machine_minutes_per_sheet: req.machine_minutes_per_sheet,
            cleanup_minutes_per_sheet: req.cleanup_minutes_per_sheet,
            apply_minutes_per_hat: req.apply_minutes_per_hat,
            proof_minutes: req.proof_minutes,
            setup_minutes: req.setup_minutes,
            packing_minutes: req.packing_minutes,
            turnaround_text: req.turnaround_text,
        }
    }
}
