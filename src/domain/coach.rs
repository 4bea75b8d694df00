use serde::{Deserialize, Serialize};

use crate::domain::Searchable;
use crate::domain::types::CoachId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coach {
    pub id: CoachId,
    pub name: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub salary: Option<i64>,
}

impl Searchable for Coach {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.club.as_deref())
            .chain(self.nationality.as_deref())
            .collect()
    }
}
