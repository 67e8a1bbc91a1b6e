//! Profit-first allocation functionality.
//!
//! Splits an order total into the five profit-first bank accounts by the
//! shop's configured percentages. Used by the dashboard after a quote is
//! won; not part of the quote itself.

use rust_decimal::Decimal;

use crate::config::ProfitFirstSettings;

use super::rounding::round_to_cents;

/// An order total split into profit-first buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitFirstAllocations {
    /// Amount allocated to profit.
    pub profit: Decimal,
    /// Amount allocated to tax.
    pub tax: Decimal,
    /// Amount allocated to owner pay.
    pub owner_pay: Decimal,
    /// Amount allocated to operating expenses.
    pub ops: Decimal,
    /// Amount allocated to the buffer account.
    pub buffer: Decimal,
}

/// Splits a total price across the profit-first buckets.
///
/// Each bucket is its percentage of the total, rounded to cents
/// independently; the buckets are reports, not a reconciled ledger.
///
/// # Arguments
///
/// * `total_price` - The order total to split
/// * `settings` - The shop's profit-first percentages
///
/// # Examples
///
/// ```
/// use quotekit_engine::calculation::calculate_profit_first_allocations;
/// use quotekit_engine::config::ProfitFirstSettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let allocations = calculate_profit_first_allocations(
///     Decimal::from(1000),
///     &ProfitFirstSettings::default(),
/// );
/// assert_eq!(allocations.owner_pay, Decimal::from_str("500.00").unwrap());
/// ```
pub fn calculate_profit_first_allocations(
    total_price: Decimal,
    settings: &ProfitFirstSettings,
) -> ProfitFirstAllocations {
    let hundred = Decimal::from(100);
    let share = |pct: Decimal| round_to_cents(total_price * pct / hundred);

    ProfitFirstAllocations {
        profit: share(settings.profit_pct),
        tax: share(settings.tax_pct),
        owner_pay: share(settings.owner_pay_pct),
        ops: share(settings.ops_pct),
        buffer: share(settings.buffer_pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PF-001: default split of a round total
    #[test]
    fn test_default_split() {
        let allocations =
            calculate_profit_first_allocations(dec("1000"), &ProfitFirstSettings::default());

        assert_eq!(allocations.profit, dec("50.00"));
        assert_eq!(allocations.tax, dec("150.00"));
        assert_eq!(allocations.owner_pay, dec("500.00"));
        assert_eq!(allocations.ops, dec("250.00"));
        assert_eq!(allocations.buffer, dec("50.00"));
    }

    /// PF-002: buckets covering 100% recombine to the total
    #[test]
    fn test_default_split_recombines() {
        let total = dec("1368.00");
        let a = calculate_profit_first_allocations(total, &ProfitFirstSettings::default());

        let sum = a.profit + a.tax + a.owner_pay + a.ops + a.buffer;
        assert_eq!(sum, total);
    }

    /// PF-003: zero total allocates nothing
    #[test]
    fn test_zero_total() {
        let a = calculate_profit_first_allocations(Decimal::ZERO, &ProfitFirstSettings::default());
        assert_eq!(a.profit, dec("0.00"));
        assert_eq!(a.owner_pay, dec("0.00"));
    }
}
