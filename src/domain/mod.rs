//! Entities listed by the management views.

use crate::domain::types::SearchTerm;

pub mod club;
pub mod coach;
pub mod player;
pub mod types;

/// Entities a list search box can filter.
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &SearchTerm) -> bool {
        self.search_fields().into_iter().any(|field| term.matches(field))
    }
}
