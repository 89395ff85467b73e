//! Error types for the Benefits Cost Engine.
//!
//! The benefit calculation itself never fails. These errors cover the
//! layers around it: configuration loading and the form state that
//! collects employee and dependent input.

use thiserror::Error;

/// The main error type for the Benefits Cost Engine.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/benefits.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/benefits.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its permitted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The form already holds the maximum number of dependent fields.
    #[error("Cannot add anymore dependents. (limit {limit})")]
    DependentLimitReached {
        /// The maximum number of dependent fields.
        limit: usize,
    },

    /// A dependent field index did not refer to an existing field.
    #[error("Dependent field {index} does not exist")]
    InvalidDependentField {
        /// The index that was requested.
        index: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/benefits.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/benefits.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "discount.rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'discount.rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_dependent_limit_reached_matches_form_warning() {
        let error = EngineError::DependentLimitReached { limit: 20 };
        assert!(error.to_string().starts_with("Cannot add anymore dependents."));
        assert!(error.to_string().contains("20"));
    }

    #[test]
    fn test_invalid_dependent_field_displays_index() {
        let error = EngineError::InvalidDependentField { index: 7 };
        assert_eq!(error.to_string(), "Dependent field 7 does not exist");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_limit_reached() -> EngineResult<()> {
            Err(EngineError::DependentLimitReached { limit: 20 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_limit_reached()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
