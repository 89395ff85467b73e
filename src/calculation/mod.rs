//! Calculation logic for the Benefits Cost Engine.
//!
//! This module contains the name-prefix discount rule, the benefit calculator
//! that applies it to an employee and their dependents, paycheck arithmetic,
//! and currency display.

mod calculator;
mod currency;
mod discount;
mod payroll;

pub use calculator::{BenefitCalculator, BenefitPolicy};
pub use currency::format_currency;
pub use discount::{DiscountResult, apply_discount, apply_discount_with_audit, is_discount_eligible};
pub use payroll::{
    DEFAULT_AMOUNT_PER_PAYCHECK, DEFAULT_PAYCHECKS_PER_YEAR, per_paycheck, yearly_salary,
};
