//! Normalization of backend error payloads into form-friendly errors.
//!
//! The backend answers failures in several shapes (a message, a map of field
//! messages, either of them wrapped in `data`, or the Spanish `errores` map).
//! Views only ever deal with [`NormalizedErrors`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::GENERIC_ERROR_MESSAGE;
use crate::forms::field_errors_from_validation;

/// Field name to the single message shown under that field.
pub type FieldErrorMap = BTreeMap<String, String>;

/// Recognized error payload shapes, in matching priority.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload<'a> {
    /// `{ "data": { "error": { field: message } } }`
    WrappedFieldErrors(&'a Map<String, Value>),
    /// `{ "data": { "error": "message" } }`
    WrappedMessage(&'a str),
    /// `{ "errores": { field: message } }`
    Errores(&'a Map<String, Value>),
    /// `{ "error": "message" }`
    Message(&'a str),
    /// `{ "error": { field: message } }`
    FieldErrors(&'a Map<String, Value>),
    /// The payload is a bare string.
    Raw(&'a str),
    Unrecognized,
}

impl<'a> ErrorPayload<'a> {
    /// Classifies `raw`; the first matching shape wins.
    pub fn classify(raw: &'a Value) -> Self {
        let wrapped = raw.get("data").and_then(|data| data.get("error"));
        if let Some(Value::Object(fields)) = wrapped {
            return Self::WrappedFieldErrors(fields);
        }
        if let Some(Value::String(message)) = wrapped {
            return Self::WrappedMessage(message);
        }
        if let Some(Value::Object(fields)) = raw.get("errores") {
            return Self::Errores(fields);
        }
        match raw.get("error") {
            Some(Value::String(message)) => return Self::Message(message),
            Some(Value::Object(fields)) => return Self::FieldErrors(fields),
            _ => {}
        }
        if let Value::String(message) = raw {
            return Self::Raw(message);
        }
        Self::Unrecognized
    }
}

/// Canonical error pair rendered by forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedErrors {
    pub field_errors: FieldErrorMap,
    pub general_error: String,
}

impl NormalizedErrors {
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.general_error.is_empty()
    }

    /// One line summary: the general message, or the field messages joined.
    pub fn summary(&self) -> String {
        if !self.general_error.is_empty() {
            return self.general_error.clone();
        }
        self.field_errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<ErrorPayload<'_>> for NormalizedErrors {
    fn from(payload: ErrorPayload<'_>) -> Self {
        match payload {
            ErrorPayload::WrappedFieldErrors(fields)
            | ErrorPayload::Errores(fields)
            | ErrorPayload::FieldErrors(fields) => Self {
                field_errors: field_messages(fields),
                general_error: String::new(),
            },
            ErrorPayload::WrappedMessage(message)
            | ErrorPayload::Message(message)
            | ErrorPayload::Raw(message) => Self {
                field_errors: FieldErrorMap::new(),
                general_error: message.to_string(),
            },
            ErrorPayload::Unrecognized => Self {
                field_errors: FieldErrorMap::new(),
                general_error: GENERIC_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

fn field_message(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        Value::Array(messages) => messages
            .iter()
            .find_map(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

fn field_messages(fields: &Map<String, Value>) -> FieldErrorMap {
    fields
        .iter()
        .map(|(field, value)| (field.clone(), field_message(value)))
        .collect()
}

/// Maps any backend error payload to the canonical error pair.
pub fn normalize(raw: &Value) -> NormalizedErrors {
    let payload = ErrorPayload::classify(raw);
    if payload == ErrorPayload::Unrecognized {
        log::warn!("Unrecognized error payload: {raw}");
    }
    NormalizedErrors::from(payload)
}

/// Error state owned by a form view.
///
/// Every call to [`FormErrors::normalize`] or [`FormErrors::apply_validation`]
/// replaces the previous content entirely.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    errors: NormalizedErrors,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, raw: &Value) {
        self.errors = normalize(raw);
    }

    /// Shows client-side validation failures with the same field map.
    pub fn apply_validation(&mut self, errors: &ValidationErrors) {
        self.errors = NormalizedErrors {
            field_errors: field_errors_from_validation(errors),
            general_error: String::new(),
        };
    }

    pub fn field_errors(&self) -> &FieldErrorMap {
        &self.errors.field_errors
    }

    pub fn general_error(&self) -> &str {
        &self.errors.general_error
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.field_errors.get(field).map(String::as_str)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.field_errors.contains_key(field)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Drops the message of one field, e.g. once the user edits it.
    pub fn clear_field(&mut self, field: &str) {
        self.errors.field_errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors = NormalizedErrors::default();
    }
}
