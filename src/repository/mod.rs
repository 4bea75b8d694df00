use async_trait::async_trait;
use serde::Serialize;

use crate::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::types::SearchTerm;
use crate::pagination::PageResult;
use crate::repository::errors::SourceResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Parameters of one page fetch. Immutable once handed to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    pub query: Option<SearchTerm>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRequest {
    /// First page, default page size, no search.
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_ITEMS_PER_PAGE,
            query: None,
        }
    }

    /// Zero values are raised to 1.
    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    /// Blank terms clear the search.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.query = SearchTerm::new(term).ok();
        self
    }

    /// Zero-based index of the first item of the requested page.
    ///
    /// Saturates for pages far past any real list.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn query_str(&self) -> &str {
        self.query.as_ref().map_or("", SearchTerm::as_str)
    }
}

/// Capability that serves pages of entities to a list controller.
///
/// Implementations own the transport (REST client, fixtures, ...). Retries,
/// if any, belong here and not in the controller.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, request: PageRequest) -> SourceResult<PageResult<Self::Item>>;
}

#[async_trait]
impl<S> PageSource for std::sync::Arc<S>
where
    S: PageSource + ?Sized,
{
    type Item = S::Item;

    async fn fetch_page(&self, request: PageRequest) -> SourceResult<PageResult<Self::Item>> {
        (**self).fetch_page(request).await
    }
}
