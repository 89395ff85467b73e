//! Core data models for the Benefits Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BenefitLine, BenefitTotals, CalculationResult,
    CoveredRole,
};
pub use employee::Employee;
