use serde::{Deserialize, Serialize};

use crate::domain::Searchable;
use crate::domain::types::ClubId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub city: String,
    pub founded: Option<i32>,
    /// Season budget in euros.
    pub budget: Option<i64>,
}

impl Searchable for Club {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str()]
    }
}
