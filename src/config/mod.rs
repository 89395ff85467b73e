//! Configuration loading and management for the Benefits Cost Engine.
//!
//! This module loads payroll settings, benefit amounts, the discount rule and
//! form limits from a YAML file. Missing sections take their defaults, and
//! [`ConfigLoader::default`] describes the standard plan.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/benefits.yaml").unwrap();
//! println!("Discount criteria: {}", config.policy().discount_criteria);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BenefitRates, BenefitsConfig, DiscountConfig, FormConfig, PayrollConfig};
