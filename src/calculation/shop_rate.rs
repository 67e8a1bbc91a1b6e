//! Shop rate calculation functionality.
//!
//! This module derives the shop's hourly and per-minute labor rates from its
//! monthly financial targets and available capacity. Every labor cost in a
//! quote flows through this rate.

use rust_decimal::Decimal;

use crate::config::CapacitySettings;

use super::rounding::round_to_cents;

/// Average weeks per month used to convert weekly capacity to monthly.
fn weeks_per_month() -> Decimal {
    Decimal::new(433, 2)
}

/// The result of a shop rate calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRateResult {
    /// The hourly labor rate in dollars, rounded to cents.
    pub hourly_rate: Decimal,
    /// The per-minute labor rate (hourly rate divided by 60, unrounded).
    pub minute_rate: Decimal,
    /// Workable hours in an average month.
    pub workable_hours_month: Decimal,
    /// Billable hours in an average month.
    pub billable_hours_month: Decimal,
    /// Monthly revenue required to hit overhead, owner pay, and profit.
    pub required_monthly: Decimal,
}

/// Derives the shop's labor rate from capacity and financial targets.
///
/// Monthly workable hours are weekly hours times 4.33 (average weeks per
/// month); billable hours discount that by the billable efficiency
/// percentage. The hourly rate is the revenue required to cover overhead,
/// owner pay, and the profit goal, spread over the billable hours.
///
/// If billable hours resolve to zero or below (no capacity, or zero
/// efficiency), the rates are zero rather than an error: the shop still gets
/// a quote, just one that prices labor at nothing.
///
/// # Arguments
///
/// * `capacity` - The shop's capacity and financial target settings
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::calculate_shop_rate;
/// use quotekit_engine::config::CapacitySettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_shop_rate(&CapacitySettings::default());
/// // 40 h/wk at 75% efficiency covering $10,000/month
/// assert_eq!(result.hourly_rate, Decimal::from_str("76.98").unwrap());
/// ```
pub fn calculate_shop_rate(capacity: &CapacitySettings) -> ShopRateResult {
    let workable_hours_month = capacity.workable_hours_per_week * weeks_per_month();
    let billable_hours_month =
        workable_hours_month * capacity.billable_efficiency_pct / Decimal::from(100);

    let required_monthly = capacity.monthly_overhead
        + capacity.monthly_owner_pay_goal
        + capacity.monthly_profit_goal;

    if billable_hours_month <= Decimal::ZERO {
        return ShopRateResult {
            hourly_rate: Decimal::ZERO,
            minute_rate: Decimal::ZERO,
            workable_hours_month,
            billable_hours_month,
            required_monthly,
        };
    }

    let hourly_rate = round_to_cents(required_monthly / billable_hours_month);
    let minute_rate = hourly_rate / Decimal::from(60);

    ShopRateResult {
        hourly_rate,
        minute_rate,
        workable_hours_month,
        billable_hours_month,
        required_monthly,
    }
}
