//! Fixture-backed source, used when no backend is reachable and in demos.

use async_trait::async_trait;

use crate::domain::Searchable;
use crate::pagination::PageResult;
use crate::repository::errors::SourceResult;
use crate::repository::{PageRequest, PageSource};

/// Serves a fixed list of entities, filtered and sliced per request.
#[derive(Debug, Clone)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

impl<T> InMemorySource<T>
where
    T: Searchable + Clone,
{
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Synchronous core of [`PageSource::fetch_page`].
    pub fn page(&self, request: &PageRequest) -> PageResult<T> {
        let matching: Vec<&T> = match &request.query {
            Some(term) => self.items.iter().filter(|item| item.matches(term)).collect(),
            None => self.items.iter().collect(),
        };

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .cloned()
            .collect();

        PageResult::new(items, request.page, request.page_size, total)
    }
}

#[async_trait]
impl<T> PageSource for InMemorySource<T>
where
    T: Searchable + Clone + Send + Sync,
{
    type Item = T;

    async fn fetch_page(&self, request: PageRequest) -> SourceResult<PageResult<T>> {
        Ok(self.page(&request))
    }
}
