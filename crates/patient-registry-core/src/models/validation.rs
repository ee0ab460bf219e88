//! Structured validation failures.
//!
//! Validation produces a list of per-field violations rather than a
//! formatted string, so callers can surface the entries structurally.

use std::fmt;

use serde::Serialize;

/// A single field constraint violation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable constraint description
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations found in one validation pass.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Ok when no violations were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_display_joins_entries() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("age", "must be between 1 and 119"));
        errors.push(FieldError::new("height", "must be a positive number"));
        assert_eq!(
            errors.to_string(),
            "age: must be between 1 and 119; height: must be a positive number"
        );
    }

    #[test]
    fn test_serializes_as_array() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("name", "must be a non-empty string"));
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["field"], "name");
    }
}
