use serde::Serialize;

use crate::pagination::{PageLink, PageMeta, visible_pages};
use crate::services::list_query::ListQueryState;

/// Data required to render a list view: table rows, pager and status.
#[derive(Debug, Clone, Serialize)]
pub struct ListPageData<R> {
    pub rows: Vec<R>,
    pub pages: Vec<PageLink>,
    pub page: usize,
    /// "Mostrando 21 a 30 de 100".
    pub summary: String,
    /// Search query echoed back to the search box when present.
    pub search_query: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Range summary shown under the table.
pub fn range_summary(meta: &PageMeta) -> String {
    if meta.total_items == 0 {
        return "Mostrando 1 a 0 de 0".to_string();
    }
    format!(
        "Mostrando {} a {} de {}",
        meta.start_item, meta.end_item, meta.total_items
    )
}

impl<R> ListPageData<R> {
    pub fn from_state<T>(state: &ListQueryState<T>, window_radius: usize) -> Self
    where
        for<'a> R: From<&'a T>,
    {
        let search_query = Some(state.query.trim().to_string()).filter(|s| !s.is_empty());

        Self {
            rows: state.items.iter().map(R::from).collect(),
            pages: visible_pages(
                state.pagination.current_page,
                state.pagination.total_pages,
                window_radius,
            ),
            page: state.pagination.current_page,
            summary: range_summary(&state.pagination),
            search_query,
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}
