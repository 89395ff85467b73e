//! Calculation result models for the Benefits Cost Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that itemize a benefit calculation: one line per covered person, the totals,
//! and an audit trace of every discount decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whose benefits a line covers.
///
/// # Example
///
/// ```
/// use benefits_engine::models::CoveredRole;
///
/// let role = CoveredRole::Dependent;
/// assert_eq!(format!("{:?}", role), "Dependent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveredRole {
    /// The employee themselves, charged the base benefit amount.
    Employee,
    /// A spouse or child, charged the dependent benefit amount.
    Dependent,
}

/// The benefit cost attributed to one covered person.
///
/// # Example
///
/// ```
/// use benefits_engine::models::{BenefitLine, CoveredRole};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = BenefitLine {
///     name: "Amy".to_string(),
///     role: CoveredRole::Dependent,
///     base_amount: Decimal::from_str("500").unwrap(),
///     discount_applied: true,
///     discount_amount: Decimal::from_str("50").unwrap(),
///     cost: Decimal::from_str("450").unwrap(),
/// };
/// assert_eq!(line.base_amount - line.discount_amount, line.cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLine {
    /// The covered person's name as entered.
    pub name: String,
    /// Whether this line is for the employee or a dependent.
    pub role: CoveredRole,
    /// The undiscounted benefit amount for this role.
    pub base_amount: Decimal,
    /// Whether the name matched the discount criteria.
    pub discount_applied: bool,
    /// The amount taken off `base_amount` (zero when no discount applied).
    pub discount_amount: Decimal,
    /// The benefit cost charged for this person.
    pub cost: Decimal,
}

/// Aggregated totals for a benefit calculation.
///
/// # Example
///
/// ```
/// use benefits_engine::models::BenefitTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = BenefitTotals {
///     gross_benefits: Decimal::from_str("2000").unwrap(),
///     total_discount: Decimal::from_str("50").unwrap(),
///     total_benefits: Decimal::from_str("1950").unwrap(),
///     pay_after_benefits: Decimal::from_str("50050").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitTotals {
    /// Sum of every line's undiscounted base amount.
    pub gross_benefits: Decimal,
    /// Sum of every line's discount.
    pub total_discount: Decimal,
    /// Sum of every line's cost.
    pub total_benefits: Decimal,
    /// Yearly salary less `total_benefits`.
    pub pay_after_benefits: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the result; they flag input worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete, itemized result of a benefit calculation.
///
/// `totals.pay_after_benefits` is always the same value the scalar
/// `BenefitCalculator::calculate` returns for the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee's name at the time of calculation.
    pub employee_name: String,
    /// The employee's yearly salary before benefits.
    pub yearly_salary: Decimal,
    /// One line per covered person: the employee first, then dependents in order.
    pub benefit_lines: Vec<BenefitLine>,
    /// Aggregated totals for the calculation.
    pub totals: BenefitTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
