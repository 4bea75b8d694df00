//! Error conversion glue between the domain, form and source layers.
//!
//! The domain layer must not depend on source or form error types, so the
//! conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::errors::NormalizedErrors;
use crate::forms::FormError;
use crate::repository::errors::SourceError;

impl From<TypeConstraintError> for SourceError {
    fn from(val: TypeConstraintError) -> Self {
        SourceError::ValidationError(val.to_string())
    }
}

impl From<FormError> for NormalizedErrors {
    fn from(val: FormError) -> Self {
        NormalizedErrors {
            field_errors: val.field_errors(),
            general_error: String::new(),
        }
    }
}
