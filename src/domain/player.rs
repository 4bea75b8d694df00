use serde::{Deserialize, Serialize};

use crate::domain::Searchable;
use crate::domain::types::PlayerId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    /// Transfer market value in euros.
    pub market_value: Option<i64>,
    /// Yearly gross salary in euros.
    pub salary: Option<i64>,
}

impl Searchable for Player {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), Some(self.position.as_str())]
            .into_iter()
            .chain([self.club.as_deref(), self.nationality.as_deref()])
            .flatten()
            .collect()
    }
}
