use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::{FormError, not_blank, optional_text};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a coach.
pub struct CoachForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "El nombre no puede superar 100 caracteres")
    )]
    pub name: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    #[validate(range(min = 0, message = "El salario no puede ser negativo"))]
    pub salary: Option<i64>,
}

/// Validated, trimmed coach data sent to the backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CoachPayload {
    pub name: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub salary: Option<i64>,
}

impl TryFrom<CoachForm> for CoachPayload {
    type Error = FormError;

    fn try_from(form: CoachForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: form.name.trim().to_string(),
            club: optional_text(form.club),
            nationality: optional_text(form.nationality),
            salary: form.salary,
        })
    }
}
