//! Reusable field validators
//!
//! Each validator reports the offending field name so the boundary layer
//! can surface it in the error response.

use crate::core::error::ValidationError;

/// Validator: text must not be empty (whitespace-only counts as empty)
pub fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Field {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Validator: integer must be strictly positive
pub fn positive(field: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        Err(ValidationError::Field {
            field: field.to_string(),
            message: format!("must be strictly positive (got {})", value),
        })
    } else {
        Ok(())
    }
}
