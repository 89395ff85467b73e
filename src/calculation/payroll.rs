//! Paycheck arithmetic.
//!
//! Salaries are quoted as a number of equal paychecks per year. These helpers
//! convert between the yearly figure the calculator works with and the
//! per-paycheck figure shown to employees.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of paychecks in a year (fortnightly pay).
pub const DEFAULT_PAYCHECKS_PER_YEAR: u32 = 26;

/// Gross amount of each paycheck before benefits.
pub const DEFAULT_AMOUNT_PER_PAYCHECK: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Returns the yearly salary for a number of equal paychecks.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::{
///     DEFAULT_AMOUNT_PER_PAYCHECK, DEFAULT_PAYCHECKS_PER_YEAR, yearly_salary,
/// };
/// use rust_decimal::Decimal;
///
/// let salary = yearly_salary(DEFAULT_PAYCHECKS_PER_YEAR, DEFAULT_AMOUNT_PER_PAYCHECK);
/// assert_eq!(salary, Decimal::from(52000));
/// ```
pub fn yearly_salary(paychecks_per_year: u32, amount_per_paycheck: Decimal) -> Decimal {
    Decimal::from(paychecks_per_year) * amount_per_paycheck
}

/// Splits a yearly amount into equal paychecks, rounded to cents.
///
/// Returns `None` when `paychecks_per_year` is zero.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::per_paycheck;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = per_paycheck(Decimal::from(50050), 26).unwrap();
/// assert_eq!(amount, Decimal::from_str("1925.00").unwrap());
/// ```
pub fn per_paycheck(yearly_amount: Decimal, paychecks_per_year: u32) -> Option<Decimal> {
    if paychecks_per_year == 0 {
        return None;
    }
    let amount = yearly_amount / Decimal::from(paychecks_per_year);
    Some(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
