//! Configuration types for benefit calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    BenefitPolicy, DEFAULT_AMOUNT_PER_PAYCHECK, DEFAULT_PAYCHECKS_PER_YEAR, yearly_salary,
};
use crate::form::DEPENDENT_FIELD_LIMIT;

/// How the employee is paid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Number of paychecks in a year.
    pub paychecks_per_year: u32,
    /// Gross amount of each paycheck.
    pub amount_per_paycheck: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            paychecks_per_year: DEFAULT_PAYCHECKS_PER_YEAR,
            amount_per_paycheck: DEFAULT_AMOUNT_PER_PAYCHECK,
        }
    }
}

/// Benefit amounts before any discount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenefitRates {
    /// Cost of benefits for the employee.
    pub base_benefit_amount: Decimal,
    /// Cost of benefits for each dependent.
    pub dependent_benefit_amount: Decimal,
}

impl Default for BenefitRates {
    fn default() -> Self {
        Self {
            base_benefit_amount: Decimal::from(1000),
            dependent_benefit_amount: Decimal::from(500),
        }
    }
}

/// The name-prefix discount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    /// Fraction taken off a qualifying benefit amount.
    pub rate: Decimal,
    /// Name prefix that qualifies for the discount.
    pub criteria: String,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            rate: Decimal::new(10, 2),
            criteria: "A".to_string(),
        }
    }
}

/// Limits on the input form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Maximum number of dependent fields.
    pub dependent_limit: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dependent_limit: DEPENDENT_FIELD_LIMIT,
        }
    }
}

/// The complete benefits configuration loaded from YAML.
///
/// Every section is optional in the file; missing sections take their
/// default values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BenefitsConfig {
    /// Payroll settings.
    #[serde(default)]
    pub payroll: PayrollConfig,
    /// Benefit amounts.
    #[serde(default)]
    pub benefits: BenefitRates,
    /// Discount rule.
    #[serde(default)]
    pub discount: DiscountConfig,
    /// Form limits.
    #[serde(default)]
    pub form: FormConfig,
}

impl BenefitsConfig {
    /// Returns the benefit policy described by this configuration.
    pub fn policy(&self) -> BenefitPolicy {
        BenefitPolicy {
            base_benefit_amount: self.benefits.base_benefit_amount,
            dependent_benefit_amount: self.benefits.dependent_benefit_amount,
            discount: self.discount.rate,
            discount_criteria: self.discount.criteria.clone(),
        }
    }

    /// Returns the yearly salary implied by the payroll settings.
    pub fn yearly_salary(&self) -> Decimal {
        yearly_salary(
            self.payroll.paychecks_per_year,
            self.payroll.amount_per_paycheck,
        )
    }
}
