//! Validation utilities.

use crate::{FieldError, ShopError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ShopError` on failure.
    fn validate_request(&self) -> Result<(), ShopError> {
        self.validate().map_err(validation_errors_to_shop_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, sorted by field
/// name so messages are stable.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `ShopError`.
#[must_use]
pub fn validation_errors_to_shop_error(errors: ValidationErrors) -> ShopError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    ShopError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct Query {
        #[validate(range(max = 100, message = "size too large"))]
        size: usize,
        #[validate(custom(function = "not_blank"))]
        term: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_validate_request_ok() {
        let query = Query { size: 10, term: "phone".to_string() };
        assert!(query.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_collects_fields() {
        let query = Query { size: 500, term: " ".to_string() };
        let err = query.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let message = err.to_string();
        assert!(message.contains("size: size too large"));
        assert!(message.contains("term: not_blank"));
    }
}
