//! Dependent name fields.

use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Maximum number of dependent fields on the form.
pub const DEPENDENT_FIELD_LIMIT: usize = 20;

/// The dependent name fields shown on the form, in display order.
///
/// The form opens with one blank field. More can be added up to the limit;
/// fields are never removed, and a blank field simply covers nobody.
///
/// # Examples
///
/// ```
/// use benefits_engine::form::DependentFields;
///
/// let mut fields = DependentFields::new();
/// fields.add_field().unwrap();
/// fields.set(1, "Amy").unwrap();
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.names(), vec!["Amy".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentFields {
    values: Vec<String>,
    limit: usize,
}

impl DependentFields {
    /// Creates the fields with the standard limit of [`DEPENDENT_FIELD_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEPENDENT_FIELD_LIMIT)
    }

    /// Creates the fields with a custom limit. A limit of zero is treated as one,
    /// since the form always shows its first field.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            values: vec![String::new()],
            limit: limit.max(1),
        }
    }

    /// Returns the number of fields, blank ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the form keeps at least one field.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the maximum number of fields.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns true if another field can be added.
    pub fn has_capacity(&self) -> bool {
        self.values.len() < self.limit
    }

    /// Appends a blank field and returns the new field count.
    ///
    /// Returns [`EngineError::DependentLimitReached`] once the limit is reached.
    pub fn add_field(&mut self) -> EngineResult<usize> {
        if !self.has_capacity() {
            warn!(limit = self.limit, "Dependent field limit reached");
            return Err(EngineError::DependentLimitReached { limit: self.limit });
        }
        self.values.push(String::new());
        Ok(self.values.len())
    }

    /// Sets the value of the field at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> EngineResult<()> {
        let field = self
            .values
            .get_mut(index)
            .ok_or(EngineError::InvalidDependentField { index })?;
        *field = value.into();
        Ok(())
    }

    /// Returns the raw field values, blanks included.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the non-blank values in field order.
    pub fn names(&self) -> Vec<String> {
        self.values
            .iter()
            .filter(|value| !value.is_empty())
            .cloned()
            .collect()
    }
}

impl Default for DependentFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_blank_field() {
        let fields = DependentFields::new();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.values(), &[String::new()]);
        assert!(fields.names().is_empty());
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_can_fill_up_to_limit() {
        let mut fields = DependentFields::new();
        for expected in 2..=DEPENDENT_FIELD_LIMIT {
            assert_eq!(fields.add_field().unwrap(), expected);
        }
        assert_eq!(fields.len(), 20);
        assert!(!fields.has_capacity());
    }

    #[test]
    fn test_adding_past_limit_is_rejected() {
        let mut fields = DependentFields::new();
        while fields.has_capacity() {
            fields.add_field().unwrap();
        }

        match fields.add_field() {
            Err(EngineError::DependentLimitReached { limit }) => assert_eq!(limit, 20),
            other => panic!("Expected DependentLimitReached, got {:?}", other),
        }
        assert_eq!(fields.len(), 20);
    }

    #[test]
    fn test_custom_limit() {
        let mut fields = DependentFields::with_limit(2);
        assert!(fields.add_field().is_ok());
        assert!(fields.add_field().is_err());
    }

    #[test]
    fn test_zero_limit_still_keeps_first_field() {
        let fields = DependentFields::with_limit(0);
        assert_eq!(fields.limit(), 1);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut fields = DependentFields::new();
        match fields.set(3, "Amy") {
            Err(EngineError::InvalidDependentField { index }) => assert_eq!(index, 3),
            other => panic!("Expected InvalidDependentField, got {:?}", other),
        }
    }

    #[test]
    fn test_names_skip_blank_fields_and_keep_order() {
        let mut fields = DependentFields::new();
        fields.add_field().unwrap();
        fields.add_field().unwrap();
        fields.set(0, "Charlie").unwrap();
        fields.set(2, "Amy").unwrap();

        assert_eq!(fields.names(), vec!["Charlie".to_string(), "Amy".to_string()]);
    }

    #[test]
    fn test_clearing_a_field_drops_the_name() {
        let mut fields = DependentFields::new();
        fields.set(0, "Amy").unwrap();
        fields.set(0, "").unwrap();
        assert!(fields.names().is_empty());
    }
}
