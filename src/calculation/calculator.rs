//! Benefit cost calculator.
//!
//! [`BenefitCalculator`] owns the employee being calculated and the benefit
//! policy applied to them. Callers mutate the employee in place through
//! [`BenefitCalculator::employee_mut`]; every call to
//! [`BenefitCalculator::calculate`] reads the current state.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BenefitLine, BenefitTotals, CalculationResult,
    CoveredRole, Employee,
};

use super::discount::{apply_discount, apply_discount_with_audit};

/// The benefit costs and discount rule applied to every employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitPolicy {
    /// Cost of benefits for the employee.
    pub base_benefit_amount: Decimal,
    /// Flat cost of benefits for each dependent.
    pub dependent_benefit_amount: Decimal,
    /// Fraction taken off a discounted person's benefit amount, between 0 and 1.
    pub discount: Decimal,
    /// Name prefix that qualifies a person for the discount.
    pub discount_criteria: String,
}

/// Computes an employee's salary after the cost of benefits.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::BenefitCalculator;
/// use benefits_engine::models::Employee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee::new(
///     "Bob",
///     Decimal::from(52000),
///     vec!["Amy".to_string(), "Charlie".to_string()],
/// );
/// let calculator = BenefitCalculator::new(
///     employee,
///     Decimal::from(1000),
///     Decimal::from(500),
///     Decimal::from_str("0.10").unwrap(),
///     "A",
/// );
/// assert_eq!(calculator.calculate(), Decimal::from(50050));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitCalculator {
    employee: Employee,
    policy: BenefitPolicy,
}

impl BenefitCalculator {
    /// Creates a calculator for `employee` with the given benefit parameters.
    pub fn new(
        employee: Employee,
        base_benefit_amount: Decimal,
        dependent_benefit_amount: Decimal,
        discount: Decimal,
        discount_criteria: impl Into<String>,
    ) -> Self {
        Self::with_policy(
            employee,
            BenefitPolicy {
                base_benefit_amount,
                dependent_benefit_amount,
                discount,
                discount_criteria: discount_criteria.into(),
            },
        )
    }

    /// Creates a calculator for `employee` from an existing policy.
    pub fn with_policy(employee: Employee, policy: BenefitPolicy) -> Self {
        Self { employee, policy }
    }

    /// Returns the employee being calculated.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the employee for in-place edits ahead of the next calculation.
    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    /// Returns the benefit policy.
    pub fn policy(&self) -> &BenefitPolicy {
        &self.policy
    }

    /// Returns the summed benefit cost of the employee and every dependent.
    pub fn total_benefits(&self) -> Decimal {
        let policy = &self.policy;
        let employee_cost = apply_discount(
            &self.employee.name,
            policy.base_benefit_amount,
            policy.discount,
            &policy.discount_criteria,
        );

        self.employee
            .dependents
            .iter()
            .map(|dependent| {
                apply_discount(
                    dependent,
                    policy.dependent_benefit_amount,
                    policy.discount,
                    &policy.discount_criteria,
                )
            })
            .fold(employee_cost, |total, cost| total + cost)
    }

    /// Returns the employee's yearly salary less the total cost of benefits.
    pub fn calculate(&self) -> Decimal {
        self.employee.yearly_salary - self.total_benefits()
    }

    /// Performs the same calculation as [`calculate`](Self::calculate), itemized
    /// per covered person with an audit trace.
    pub fn calculate_detailed(&self) -> CalculationResult {
        let start_time = Instant::now();
        let policy = &self.policy;
        let mut benefit_lines: Vec<BenefitLine> = Vec::new();
        let mut audit_steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let mut step_number: u32 = 1;

        let people = std::iter::once((&self.employee.name, CoveredRole::Employee)).chain(
            self.employee
                .dependents
                .iter()
                .map(|dependent| (dependent, CoveredRole::Dependent)),
        );

        for (position, (name, role)) in people.enumerate() {
            let base_amount = match role {
                CoveredRole::Employee => policy.base_benefit_amount,
                CoveredRole::Dependent => policy.dependent_benefit_amount,
            };

            if role == CoveredRole::Dependent && name.is_empty() {
                warnings.push(AuditWarning {
                    code: "EMPTY_DEPENDENT_NAME".to_string(),
                    message: format!(
                        "Dependent at index {} has no name; charged the full amount",
                        position - 1
                    ),
                    severity: "low".to_string(),
                });
            }

            let result = apply_discount_with_audit(
                name,
                base_amount,
                policy.discount,
                &policy.discount_criteria,
                step_number,
            );
            audit_steps.push(result.audit_step);
            step_number += 1;

            benefit_lines.push(BenefitLine {
                name: name.clone(),
                role,
                base_amount,
                discount_applied: result.discount_applied,
                discount_amount: result.discount_amount,
                cost: result.cost,
            });
        }

        let gross_benefits: Decimal = benefit_lines.iter().map(|line| line.base_amount).sum();
        let total_discount: Decimal = benefit_lines.iter().map(|line| line.discount_amount).sum();
        let total_benefits: Decimal = benefit_lines.iter().map(|line| line.cost).sum();
        let pay_after_benefits = self.employee.yearly_salary - total_benefits;

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "pay_after_benefits".to_string(),
            rule_name: "Pay After Benefits".to_string(),
            input: serde_json::json!({
                "yearly_salary": self.employee.yearly_salary.normalize().to_string(),
                "total_benefits": total_benefits.normalize().to_string(),
                "covered_people": benefit_lines.len()
            }),
            output: serde_json::json!({
                "pay_after_benefits": pay_after_benefits.normalize().to_string()
            }),
            reasoning: format!(
                "${} - ${} = ${}",
                self.employee.yearly_salary.normalize(),
                total_benefits.normalize(),
                pay_after_benefits.normalize()
            ),
        });

        debug!(
            employee = %self.employee.name,
            dependents_count = self.employee.dependents.len(),
            total_benefits = %total_benefits,
            pay_after_benefits = %pay_after_benefits,
            "Benefit calculation completed"
        );

        CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_name: self.employee.name.clone(),
            yearly_salary: self.employee.yearly_salary,
            benefit_lines,
            totals: BenefitTotals {
                gross_benefits,
                total_discount,
                total_benefits,
                pay_after_benefits,
            },
            audit_trace: AuditTrace {
                steps: audit_steps,
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        }
    }
}
