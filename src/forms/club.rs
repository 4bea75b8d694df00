use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::{FormError, not_blank};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a club.
pub struct ClubForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "El nombre no puede superar 100 caracteres")
    )]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(range(min = 1850, max = 2100, message = "Año de fundación no válido"))]
    pub founded: Option<i32>,
    #[validate(range(min = 0, message = "El presupuesto no puede ser negativo"))]
    pub budget: Option<i64>,
}

/// Validated, trimmed club data sent to the backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClubPayload {
    pub name: String,
    pub city: String,
    pub founded: Option<i32>,
    pub budget: Option<i64>,
}

impl TryFrom<ClubForm> for ClubPayload {
    type Error = FormError;

    fn try_from(form: ClubForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            founded: form.founded,
            budget: form.budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormErrors;

    #[test]
    fn implausible_founding_year_is_rejected() {
        let form = ClubForm {
            name: "Athletic Club".to_string(),
            city: "Bilbao".to_string(),
            founded: Some(1492),
            budget: Some(0),
        };

        let err = ClubPayload::try_from(form).expect_err("year out of range");

        assert_eq!(
            err.field_errors().get("founded").map(String::as_str),
            Some("Año de fundación no válido")
        );
    }

    #[test]
    fn validation_feeds_form_errors() {
        let form = ClubForm::default();
        let mut errors = FormErrors::new();
        errors.normalize(&serde_json::json!({ "error": "stale general error" }));

        let validation = form.validate().expect_err("empty form");
        errors.apply_validation(&validation);

        assert!(errors.has_field_error("name"));
        assert!(errors.has_field_error("city"));
        assert_eq!(errors.general_error(), "");
    }
}
