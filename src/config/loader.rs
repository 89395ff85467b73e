//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the benefits
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::calculation::BenefitPolicy;
use crate::error::{EngineError, EngineResult};

use super::types::BenefitsConfig;

/// Loads, validates and provides access to the benefits configuration.
///
/// # File Layout
///
/// ```text
/// payroll:
///   paychecks_per_year: 26
///   amount_per_paycheck: "2000"
/// benefits:
///   base_benefit_amount: "1000"
///   dependent_benefit_amount: "500"
/// discount:
///   rate: "0.10"
///   criteria: "A"
/// form:
///   dependent_limit: 20
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/benefits.yaml").unwrap();
/// println!("Yearly salary: ${}", loader.yearly_salary());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BenefitsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A value is out of range (see [`ConfigLoader::from_config`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: BenefitsConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(config)?;
        info!(path = %path_str, "Loaded benefits configuration");
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use benefits_engine::config::ConfigLoader;
    ///
    /// let yaml = "discount:\n  rate: \"0.25\"\n  criteria: \"B\"\n";
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.policy().discount_criteria, "B");
    /// # Ok::<(), benefits_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let config: BenefitsConfig =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    ///
    /// The discount rate must lie in `[0, 1]`, amounts must be non-negative,
    /// the discount criteria must be non-empty and there must be at least one
    /// paycheck per year and one dependent field.
    ///
    /// The yearly salary and the benefit total for a full form (the employee
    /// plus `dependent_limit` dependents) must both fit in a [`Decimal`].
    pub fn from_config(config: BenefitsConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &BenefitsConfig) -> EngineResult<()> {
        if config.payroll.paychecks_per_year == 0 {
            return Err(invalid("payroll.paychecks_per_year", "must be at least 1"));
        }
        ensure_non_negative("payroll.amount_per_paycheck", config.payroll.amount_per_paycheck)?;
        ensure_non_negative(
            "benefits.base_benefit_amount",
            config.benefits.base_benefit_amount,
        )?;
        ensure_non_negative(
            "benefits.dependent_benefit_amount",
            config.benefits.dependent_benefit_amount,
        )?;
        if config.discount.rate < Decimal::ZERO || config.discount.rate > Decimal::ONE {
            return Err(invalid("discount.rate", "must be between 0 and 1"));
        }
        if config.discount.criteria.is_empty() {
            return Err(invalid("discount.criteria", "must not be empty"));
        }
        if config.form.dependent_limit == 0 {
            return Err(invalid("form.dependent_limit", "must be at least 1"));
        }

        if Decimal::from(config.payroll.paychecks_per_year)
            .checked_mul(config.payroll.amount_per_paycheck)
            .is_none()
        {
            return Err(invalid("payroll.amount_per_paycheck", "yearly salary is too large"));
        }
        let dependents_total = Decimal::from(config.form.dependent_limit)
            .checked_mul(config.benefits.dependent_benefit_amount)
            .ok_or_else(|| {
                invalid(
                    "benefits.dependent_benefit_amount",
                    "benefit total for a full form is too large",
                )
            })?;
        if dependents_total.checked_add(config.benefits.base_benefit_amount).is_none() {
            return Err(invalid(
                "benefits.base_benefit_amount",
                "benefit total for a full form is too large",
            ));
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &BenefitsConfig {
        &self.config
    }

    /// Returns the benefit policy.
    pub fn policy(&self) -> BenefitPolicy {
        self.config.policy()
    }

    /// Returns the yearly salary implied by the payroll settings.
    pub fn yearly_salary(&self) -> Decimal {
        self.config.yearly_salary()
    }

    /// Returns the maximum number of dependent fields on the form.
    pub fn dependent_limit(&self) -> usize {
        self.config.form.dependent_limit
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormEvent, FormState};
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/benefits.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().payroll.paychecks_per_year, 26);
        assert_eq!(loader.yearly_salary(), dec("52000"));
        assert_eq!(loader.dependent_limit(), 20);
    }

    #[test]
    fn test_loaded_policy_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), ConfigLoader::default().policy());
    }

    #[test]
    fn test_default_policy_values() {
        let policy = ConfigLoader::default().policy();
        assert_eq!(policy.base_benefit_amount, dec("1000"));
        assert_eq!(policy.dependent_benefit_amount, dec("500"));
        assert_eq!(policy.discount, dec("0.10"));
        assert_eq!(policy.discount_criteria, "A");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/benefits.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("benefits.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let yaml = "benefits:\n  base_benefit_amount: \"1200\"\n  \
                    dependent_benefit_amount: \"600\"\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();

        assert_eq!(loader.policy().base_benefit_amount, dec("1200"));
        assert_eq!(loader.policy().discount, dec("0.10"));
        assert_eq!(loader.yearly_salary(), dec("52000"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("discount: [not, a, map]");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_discount_above_one_is_rejected() {
        let result = ConfigLoader::from_yaml_str("discount:\n  rate: \"1.5\"\n  criteria: \"A\"\n");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "discount.rate"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_discount_bounds_are_inclusive() {
        for rate in ["0", "1"] {
            let yaml = format!("discount:\n  rate: \"{}\"\n  criteria: \"A\"\n", rate);
            assert!(ConfigLoader::from_yaml_str(&yaml).is_ok(), "rate {} rejected", rate);
        }
    }

    #[test]
    fn test_empty_criteria_is_rejected() {
        let result = ConfigLoader::from_yaml_str("discount:\n  rate: \"0.1\"\n  criteria: \"\"\n");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "discount.criteria"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_negative_dependent_amount_is_rejected() {
        let mut config = BenefitsConfig::default();
        config.benefits.dependent_benefit_amount = dec("-1");

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "benefits.dependent_benefit_amount")
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_zero_paychecks_is_rejected() {
        let mut config = BenefitsConfig::default();
        config.payroll.paychecks_per_year = 0;
        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_partial_section_keeps_remaining_defaults() {
        let loader = ConfigLoader::from_yaml_str("discount:\n  criteria: \"B\"\n").unwrap();

        assert_eq!(loader.policy().discount_criteria, "B");
        assert_eq!(loader.policy().discount, dec("0.10"));

        let loader = ConfigLoader::from_yaml_str("payroll:\n  paychecks_per_year: 12\n").unwrap();
        assert_eq!(loader.yearly_salary(), dec("24000"));
    }

    fn rejected_field(config: BenefitsConfig) -> String {
        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => field,
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_overflow_is_rejected() {
        let mut config = BenefitsConfig::default();
        config.payroll.amount_per_paycheck = Decimal::MAX;
        assert_eq!(rejected_field(config), "payroll.amount_per_paycheck");
    }

    #[test]
    fn test_dependent_total_overflow_is_rejected() {
        let mut config = BenefitsConfig::default();
        config.benefits.dependent_benefit_amount = Decimal::MAX / dec("10");
        assert_eq!(rejected_field(config), "benefits.dependent_benefit_amount");
    }

    #[test]
    fn test_base_amount_overflow_is_rejected() {
        let mut config = BenefitsConfig::default();
        config.benefits.base_benefit_amount = Decimal::MAX;
        assert_eq!(rejected_field(config), "benefits.base_benefit_amount");
    }

    #[test]
    fn test_largest_accepted_amounts_calculate_without_overflow() {
        let mut config = BenefitsConfig::default();
        config.payroll.paychecks_per_year = 1;
        config.payroll.amount_per_paycheck = Decimal::MAX;
        config.form.dependent_limit = 1;
        config.benefits.base_benefit_amount = dec("39614081257132168796771975167");
        config.benefits.dependent_benefit_amount = dec("39614081257132168796771975167");

        let loader = ConfigLoader::from_config(config).unwrap();
        assert_eq!(loader.yearly_salary(), Decimal::MAX);

        let mut form = FormState::from_config(&loader);
        let total = form
            .apply(FormEvent::DependentChanged {
                index: 0,
                value: "Bob".to_string(),
            })
            .unwrap();
        assert_eq!(total, Decimal::ONE);
    }
}
