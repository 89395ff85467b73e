//! Form application state.
//!
//! [`FormState`] owns everything the benefits form needs between input
//! events: the calculator with its employee, the dependent fields and the
//! last computed total. Front ends feed it [`FormEvent`]s and display what
//! comes back.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{BenefitCalculator, BenefitPolicy, format_currency};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{CalculationResult, Employee};

use super::dependents::DependentFields;

/// An input change on the benefits form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The employee name field changed.
    EmployeeNameChanged(String),
    /// A dependent name field changed.
    DependentChanged {
        /// Which field changed.
        index: usize,
        /// The field's new value.
        value: String,
    },
    /// A new blank dependent field was requested.
    DependentAdded,
}

/// Application state behind the benefits form.
///
/// # Examples
///
/// ```
/// use benefits_engine::config::ConfigLoader;
/// use benefits_engine::form::{FormEvent, FormState};
///
/// let mut form = FormState::from_config(&ConfigLoader::default());
/// assert_eq!(form.display_total(), "$51,000");
///
/// form.apply(FormEvent::EmployeeNameChanged("Anna".to_string())).unwrap();
/// assert_eq!(form.display_total(), "$51,100");
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
    calculator: BenefitCalculator,
    dependents: DependentFields,
    pay_after_benefits: Decimal,
}

impl FormState {
    /// Creates the form for an unnamed employee with no dependents.
    pub fn new(policy: BenefitPolicy, yearly_salary: Decimal) -> Self {
        Self::with_fields(policy, yearly_salary, DependentFields::new())
    }

    /// Creates the form from loaded configuration, honoring its dependent limit.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::with_fields(
            config.policy(),
            config.yearly_salary(),
            DependentFields::with_limit(config.dependent_limit()),
        )
    }

    fn with_fields(
        policy: BenefitPolicy,
        yearly_salary: Decimal,
        dependents: DependentFields,
    ) -> Self {
        let employee = Employee::new(String::new(), yearly_salary, Vec::new());
        let calculator = BenefitCalculator::with_policy(employee, policy);
        let pay_after_benefits = calculator.calculate();
        Self {
            calculator,
            dependents,
            pay_after_benefits,
        }
    }

    /// Applies an input event and returns the current pay after benefits.
    ///
    /// Name and dependent changes recompute the total. Adding a field does not
    /// change anyone's coverage, so the total is returned as-is. Errors leave
    /// the state untouched.
    pub fn apply(&mut self, event: FormEvent) -> EngineResult<Decimal> {
        match event {
            FormEvent::EmployeeNameChanged(name) => {
                self.calculator.employee_mut().name = name;
                self.recalculate();
            }
            FormEvent::DependentChanged { index, value } => {
                self.dependents.set(index, value)?;
                self.calculator.employee_mut().dependents = self.dependents.names();
                self.recalculate();
            }
            FormEvent::DependentAdded => {
                self.dependents.add_field()?;
            }
        }
        Ok(self.pay_after_benefits)
    }

    fn recalculate(&mut self) {
        self.pay_after_benefits = self.calculator.calculate();
        debug!(
            employee = %self.calculator.employee().name,
            dependents_count = self.calculator.employee().dependents.len(),
            pay_after_benefits = %self.pay_after_benefits,
            "Form total updated"
        );
    }

    /// Returns the calculator, including the employee as currently entered.
    pub fn calculator(&self) -> &BenefitCalculator {
        &self.calculator
    }

    /// Returns the dependent fields.
    pub fn dependent_fields(&self) -> &DependentFields {
        &self.dependents
    }

    /// Returns the last computed pay after benefits.
    pub fn pay_after_benefits(&self) -> Decimal {
        self.pay_after_benefits
    }

    /// Returns the last computed total formatted for display.
    pub fn display_total(&self) -> String {
        format_currency(self.pay_after_benefits)
    }

    /// Returns an itemized calculation for the current input.
    pub fn result(&self) -> CalculationResult {
        self.calculator.calculate_detailed()
    }
}
