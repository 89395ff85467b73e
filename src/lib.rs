//! Benefits Cost Engine
//!
//! This crate computes an employee's salary after the cost of benefits for
//! the employee and each dependent, with a discount for people whose name
//! starts with a configured prefix.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod telemetry;
