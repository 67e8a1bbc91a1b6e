//! Quote script generation functionality.
//!
//! This module renders a computed quote into the three copy-paste formats
//! the shop actually sends: a one-line SMS, a multi-line DM, and a
//! conversational phone script. Pure string templating; missing fields
//! render as formatted zeros rather than failing a quote over copy.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BlankSupplier, QuoteType, QuoteScripts, TierEntry, Upsell};

use super::rounding::round_to_cents;

/// Formats a dollar value as `$1,234.56`.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::format_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_money(Decimal::from_str("1368").unwrap()), "$1,368.00");
/// assert_eq!(format_money(Decimal::from_str("9.5").unwrap()), "$9.50");
/// ```
pub fn format_money(value: Decimal) -> String {
    let cents = round_to_cents(value);
    let sign = if cents < Decimal::ZERO { "-" } else { "" };
    let text = cents.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}

/// Formats a percentage with one decimal place, e.g. `61.1%`.
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::format_pct;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_pct(Decimal::from_str("61.05").unwrap()), "61.1%");
/// assert_eq!(format_pct(Decimal::ZERO), "0.0%");
/// ```
pub fn format_pct(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{rounded}%")
}

/// Everything the script templates need, already formatted or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParams<'a> {
    /// The requested quantity.
    pub qty: u32,
    /// The kind of quote being priced.
    pub quote_type: QuoteType,
    /// Who supplies the blank goods (mentioned for patch-press quotes).
    pub blanks_supplied_by: BlankSupplier,
    /// Material display name.
    pub material_name: &'a str,
    /// Patch width in inches.
    pub patch_width: Decimal,
    /// Patch height in inches.
    pub patch_height: Decimal,
    /// Quoted per-piece price.
    pub unit_price: Decimal,
    /// Order total, setup fee included.
    pub total: Decimal,
    /// Condensed tier list (see [`tier_summary`]).
    pub tier_summary: &'a str,
    /// Turnaround text.
    pub turnaround: &'a str,
}

/// Builds the condensed tier list quoted in scripts: the four bands above
/// the small-quantity tier, e.g. `24–47 $12.00 | 48–95 $11.00 | ...`.
pub fn tier_summary(tiers: &[TierEntry]) -> String {
    tiers
        .iter()
        .skip(1)
        .take(4)
        .map(|tier| format!("{} {}", tier.range_label, format_money(tier.published_per_piece)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Builds the one-line tier pricing text behind the copy button, covering
/// every band.
pub fn tier_pricing_text(tiers: &[TierEntry], quote_type: QuoteType) -> String {
    let unit_label = quote_type.unit_label();
    let parts = tiers
        .iter()
        .map(|tier| {
            format!(
                "{}+ {}/{}",
                tier.start_qty,
                format_money(tier.published_per_piece),
                unit_label
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!("Tier pricing: {parts}. Reply APPROVED to invoice.")
}

/// Builds the next-tier upsell prompt, if the quantity is not already in
/// the top band.
pub fn build_upsell(qty: u32, unit_price: Decimal, tiers: &[TierEntry]) -> Option<Upsell> {
    let active_index = tiers.iter().position(|tier| tier.is_active)?;
    let next = tiers.get(active_index + 1)?;

    let qty_needed = next.start_qty.saturating_sub(qty);
    let savings = round_to_cents(unit_price - next.published_per_piece);

    Some(Upsell {
        next_tier_key: next.key.clone(),
        qty_needed,
        savings_per_piece: savings,
        message: format!(
            "Add {} more to reach the next tier and save {} per unit",
            qty_needed,
            format_money(savings)
        ),
    })
}

/// Renders the three quote scripts.
///
/// Each format embeds the quantity, unit labels, material, patch size,
/// per-unit and total price, the condensed tier list, and the turnaround,
/// ending with the call to action.
pub fn generate_quote_scripts(params: &ScriptParams<'_>) -> QuoteScripts {
    let unit_label = params.quote_type.unit_label();
    let unit_label_plural = params.quote_type.unit_label_plural();
    let is_press = params.quote_type == QuoteType::PatchPress;

    let patch_size = format!(
        "{}×{}",
        params.patch_width.normalize(),
        params.patch_height.normalize()
    );
    let unit_price = format_money(params.unit_price);
    let total = format_money(params.total);

    let supplier_note = if is_press {
        format!(" ({} hats)", params.blanks_supplied_by.label())
    } else {
        String::new()
    };

    let sms = format!(
        "Quote: {qty} {unit_label_plural}{supplier_note} w/ {material} patch {patch_size}. \
         {unit_price}/{unit_label} = {total}. Tiers: {tiers}. Turnaround {turnaround}. \
         Reply APPROVED and I'll send proof + invoice.",
        qty = params.qty,
        material = params.material_name,
        tiers = params.tier_summary,
        turnaround = params.turnaround,
    );

    let dm = format!(
        "Quote for {qty} {unit_label_plural} — {material} patch {patch_size}{applied}.\n\
         Price: {unit_price}/{unit_label} = {total}.\n\
         Tiers: {tiers} (higher qty available).\n\
         Includes: patch production{application} + QC + pack-out.\n\
         Turnaround: {turnaround} after proof approval.\n\
         Next step: Reply APPROVED{colors} + ship-to address and I'll invoice.",
        qty = params.qty,
        material = params.material_name,
        applied = if is_press { " applied front" } else { "" },
        tiers = params.tier_summary,
        application = if is_press { " + application" } else { "" },
        turnaround = params.turnaround,
        colors = if is_press { " + confirm hat colors" } else { "" },
    );

    let phone = format!(
        "For {qty} {unit_label_plural} with a {patch_size} {material} patch{applied}, \
         you're around {unit_price} each ({total} total). That includes making the \
         patches{application} and QC. Turnaround is {turnaround}. If you're good with it, \
         I'll send the proof and invoice and get you on the schedule.",
        qty = params.qty,
        material = params.material_name,
        applied = if is_press { " applied" } else { "" },
        application = if is_press { ", applying them," } else { "" },
        turnaround = params.turnaround,
    );

    QuoteScripts { sms, dm, phone }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostBreakdown;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(key: &str, label: &str, start_qty: u32, published: &str, active: bool) -> TierEntry {
        TierEntry {
            key: key.to_string(),
            range_label: label.to_string(),
            start_qty,
            end_qty: None,
            is_active: active,
            published_per_piece: dec(published),
            cost_per_piece: dec("3.70"),
            wholesale_per_piece: dec("5.55"),
            profit_per_piece: dec("5.80"),
            margin_pct: dec("61.05"),
            setup_fee_applied: dec("0.00"),
            total_at_start_qty: dec("0.00"),
            below_cost: false,
            low_margin: false,
            breakdown: CostBreakdown {
                qty: start_qty,
                effective_yield: dec("33.25"),
                sheets: 1,
                material_cost: dec("7.00"),
                blank_cost: dec("0.00"),
                total_minutes: dec("34.00"),
                labor_cost: dec("43.62"),
                total_cost: dec("50.62"),
                cost_per_piece: dec("3.70"),
            },
        }
    }

    fn sample_tiers() -> Vec<TierEntry> {
        vec![
            tier("1-23", "1–23", 1, "15.00", false),
            tier("24-47", "24–47", 24, "12.00", false),
            tier("48-95", "48–95", 48, "11.00", false),
            tier("96-143", "96–143", 96, "10.00", false),
            tier("144-287", "144–287", 144, "9.50", true),
            tier("288-575", "288–575", 288, "9.00", false),
            tier("576+", "576+", 576, "8.50", false),
        ]
    }

    fn sample_params<'a>(summary: &'a str) -> ScriptParams<'a> {
        ScriptParams {
            qty: 144,
            quote_type: QuoteType::PatchPress,
            blanks_supplied_by: BlankSupplier::Customer,
            material_name: "Leatherette",
            patch_width: dec("3.25"),
            patch_height: dec("2.25"),
            unit_price: dec("9.50"),
            total: dec("1368.00"),
            tier_summary: summary,
            turnaround: "5–7 business days",
        }
    }

    /// QS-001: money formats with grouping and two decimals
    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec("9.5")), "$9.50");
        assert_eq!(format_money(dec("1368")), "$1,368.00");
        assert_eq!(format_money(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(dec("-2.15")), "-$2.15");
    }

    /// QS-002: percentages format with one decimal
    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(dec("61.05")), "61.1%");
        assert_eq!(format_pct(dec("20")), "20.0%");
        assert_eq!(format_pct(Decimal::ZERO), "0.0%");
        assert_eq!(format_pct(dec("-237.47")), "-237.5%");
    }

    /// QS-003: the condensed tier list covers bands two through five
    #[test]
    fn test_tier_summary() {
        let summary = tier_summary(&sample_tiers());
        assert_eq!(
            summary,
            "24–47 $12.00 | 48–95 $11.00 | 96–143 $10.00 | 144–287 $9.50"
        );
    }

    /// QS-004: the SMS script is one line with price, tiers, and CTA
    #[test]
    fn test_sms_script() {
        let summary = tier_summary(&sample_tiers());
        let scripts = generate_quote_scripts(&sample_params(&summary));

        assert_eq!(
            scripts.sms,
            "Quote: 144 hats (customer hats) w/ Leatherette patch 3.25×2.25. \
             $9.50/hat = $1,368.00. Tiers: 24–47 $12.00 | 48–95 $11.00 | \
             96–143 $10.00 | 144–287 $9.50. Turnaround 5–7 business days. \
             Reply APPROVED and I'll send proof + invoice."
        );
        assert!(!scripts.sms.contains('\n'));
    }

    /// QS-005: the DM script is multi-line and mentions application
    #[test]
    fn test_dm_script() {
        let summary = tier_summary(&sample_tiers());
        let scripts = generate_quote_scripts(&sample_params(&summary));

        assert!(scripts.dm.starts_with("Quote for 144 hats — Leatherette patch 3.25×2.25 applied front."));
        assert!(scripts.dm.contains("Price: $9.50/hat = $1,368.00."));
        assert!(scripts.dm.contains("patch production + application + QC + pack-out"));
        assert!(scripts.dm.contains("confirm hat colors"));
        assert!(scripts.dm.lines().count() >= 5);
    }

    /// QS-006: the phone script reads as a paragraph
    #[test]
    fn test_phone_script() {
        let summary = tier_summary(&sample_tiers());
        let scripts = generate_quote_scripts(&sample_params(&summary));

        assert!(scripts.phone.contains("you're around $9.50 each ($1,368.00 total)"));
        assert!(scripts.phone.contains(", applying them,"));
        assert!(!scripts.phone.contains('\n'));
    }

    /// QS-007: patch-only scripts drop hats, application, and colors
    #[test]
    fn test_patch_only_script_wording() {
        let summary = tier_summary(&sample_tiers());
        let mut params = sample_params(&summary);
        params.quote_type = QuoteType::PatchOnly;

        let scripts = generate_quote_scripts(&params);

        assert!(scripts.sms.starts_with("Quote: 144 patches w/ Leatherette"));
        assert!(scripts.sms.contains("$9.50/patch"));
        assert!(!scripts.dm.contains("application"));
        assert!(!scripts.dm.contains("hat colors"));
        assert!(!scripts.phone.contains("applying"));
    }

    /// QS-008: tier pricing copy text covers every band
    #[test]
    fn test_tier_pricing_text() {
        let text = tier_pricing_text(&sample_tiers(), QuoteType::PatchPress);

        assert!(text.starts_with("Tier pricing: 1+ $15.00/hat | 24+ $12.00/hat"));
        assert!(text.contains("576+ $8.50/hat"));
        assert!(text.ends_with("Reply APPROVED to invoice."));
    }

    /// QS-009: the upsell points at the next band up
    #[test]
    fn test_upsell_from_middle_tier() {
        let upsell = build_upsell(144, dec("9.50"), &sample_tiers()).unwrap();

        assert_eq!(upsell.next_tier_key, "288-575");
        assert_eq!(upsell.qty_needed, 144);
        assert_eq!(upsell.savings_per_piece, dec("0.50"));
        assert_eq!(
            upsell.message,
            "Add 144 more to reach the next tier and save $0.50 per unit"
        );
    }

    /// QS-010: no upsell from the top band
    #[test]
    fn test_no_upsell_from_top_tier() {
        let mut tiers = sample_tiers();
        for tier in tiers.iter_mut() {
            tier.is_active = tier.key == "576+";
        }

        assert!(build_upsell(600, dec("8.50"), &tiers).is_none());
    }
}
