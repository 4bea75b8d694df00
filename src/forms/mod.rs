//! Form definitions backing the player, coach and club editors.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::errors::FieldErrorMap;

pub mod club;
pub mod coach;
pub mod player;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}

impl FormError {
    /// Messages to show under each offending field.
    pub fn field_errors(&self) -> FieldErrorMap {
        match self {
            FormError::Validation(errors) => field_errors_from_validation(errors),
        }
    }
}

/// Flattens validator output to one message per field.
///
/// The first failure of a field wins; failures without a message fall back to
/// their code.
pub fn field_errors_from_validation(errors: &ValidationErrors) -> FieldErrorMap {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            let failure = failures.first()?;
            let message = failure
                .message
                .as_ref()
                .map_or_else(|| failure.code.to_string(), ToString::to_string);
            Some((field.to_string(), message))
        })
        .collect()
}

/// Rejects values made only of whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Este campo es obligatorio".into());
        return Err(error);
    }
    Ok(())
}

/// Trims optional text inputs, mapping blank ones to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
