//! Employee model.
//!
//! This module defines the Employee struct whose name and dependents
//! drive benefit costs and discount eligibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose salary is reduced by the cost of benefits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name. Empty until entered; only used for discount matching.
    #[serde(default)]
    pub name: String,
    /// Base yearly salary before benefits.
    pub yearly_salary: Decimal,
    /// Names of the employee's spouse and/or children, in display order.
    #[serde(default)]
    pub dependents: Vec<String>,
}

impl Employee {
    /// Creates a new employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Bob", Decimal::new(52000, 0), vec!["Amy".to_string()]);
    /// assert_eq!(employee.dependent_count(), 1);
    /// ```
    pub fn new(name: impl Into<String>, yearly_salary: Decimal, dependents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            yearly_salary,
            dependents,
        }
    }

    /// Returns the number of dependents covered by the employee's benefits.
    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }
}
