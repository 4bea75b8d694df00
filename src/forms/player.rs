use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::formatting::parse_millions;
use crate::forms::{FormError, not_blank, optional_text};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a player.
pub struct PlayerForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "El nombre no puede superar 100 caracteres")
    )]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    /// Market value as typed in millions notation, e.g. `"1.5M €"`.
    #[serde(default)]
    pub market_value: String,
    #[validate(range(min = 0, message = "El salario no puede ser negativo"))]
    pub salary: Option<i64>,
}

/// Validated, trimmed player data sent to the backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerPayload {
    pub name: String,
    pub position: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub market_value: Option<i64>,
    pub salary: Option<i64>,
}

impl TryFrom<PlayerForm> for PlayerPayload {
    type Error = FormError;

    fn try_from(form: PlayerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let market_value = if form.market_value.trim().is_empty() {
            None
        } else {
            Some(parse_millions(&form.market_value).round() as i64)
        };

        Ok(Self {
            name: form.name.trim().to_string(),
            position: form.position.trim().to_string(),
            club: optional_text(form.club),
            nationality: optional_text(form.nationality),
            market_value,
            salary: form.salary,
        })
    }
}
