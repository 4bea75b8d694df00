use serde_json::Value;
use thiserror::Error;

use crate::errors::normalize;

/// Failures reported by a page source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with an error payload.
    #[error("{}", normalize(.0).summary())]
    Rejected(Value),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
