//! Paged and searched list controller.
//!
//! The controller never cancels a request in flight. Every `load` takes a new
//! request token and a completion is applied only if its token is still the
//! current one, so a slow answer to an old query can never replace the
//! answer to a newer one.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::dto::list::ListPageData;
use crate::models::config::ListConfig;
use crate::pagination::{PageLink, PageMeta, navigation_target, visible_pages};
use crate::repository::{PageRequest, PageSource};
use crate::services::busy::BusyTracker;

/// Lifecycle of a list: `Idle -> Loading -> (Success | Failed) -> Loading ...`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// What happened to the result of one `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items and pagination were replaced.
    Applied,
    /// The source failed; previous items and pagination were kept.
    Failed,
    /// A newer load started meanwhile; the result was dropped.
    Stale,
}

/// Everything a list view renders.
#[derive(Debug, Clone, Serialize)]
pub struct ListQueryState<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
    pub phase: ListPhase,
    pub loading: bool,
    pub error: Option<String>,
    /// Query of the most recent load.
    pub query: String,
    /// Text waiting for the debounce window to elapse.
    pub pending_query: Option<String>,
    /// Page size used by navigation and debounced searches.
    pub page_size: usize,
    pub request_token: u64,
}

impl<T> ListQueryState<T> {
    fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            pagination: PageMeta::default(),
            phase: ListPhase::Idle,
            loading: false,
            error: None,
            query: String::new(),
            pending_query: None,
            page_size,
            request_token: 0,
        }
    }
}

#[derive(Default)]
struct DebounceSlot {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

struct Inner<S: PageSource> {
    source: S,
    state: Mutex<ListQueryState<S::Item>>,
    debounce_slot: Mutex<DebounceSlot>,
    debounce: Duration,
    window_radius: usize,
    busy: Option<BusyTracker>,
}

impl<S: PageSource> Inner<S> {
    async fn load(&self, query: String, page: usize, page_size: usize) -> LoadOutcome {
        let request = PageRequest::new()
            .paginate(page, page_size)
            .search(query.as_str());

        let token = {
            let mut state = self.state.lock();
            state.request_token += 1;
            state.phase = ListPhase::Loading;
            state.loading = true;
            state.query = query;
            state.page_size = request.page_size;
            state.request_token
        };

        let _busy = self.busy.as_ref().map(BusyTracker::begin);
        let result = self.source.fetch_page(request).await;

        let mut state = self.state.lock();
        if state.request_token != token {
            log::debug!(
                "Discarding stale list response {token}, current request is {}",
                state.request_token
            );
            return LoadOutcome::Stale;
        }

        state.loading = false;
        match result {
            Ok(page) => {
                state.items = page.items;
                state.pagination = page.meta;
                state.phase = ListPhase::Success;
                state.error = None;
                LoadOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to load list page: {err}");
                state.phase = ListPhase::Failed;
                state.error = Some(err.to_string());
                LoadOutcome::Failed
            }
        }
    }
}

/// Builder for [`ListController`].
pub struct ListControllerBuilder<S> {
    source: S,
    page_size: usize,
    debounce: Duration,
    window_radius: usize,
    busy: Option<BusyTracker>,
}

impl<S: PageSource> ListControllerBuilder<S> {
    pub fn config(mut self, config: &ListConfig) -> Self {
        self.page_size = config.page_size.max(1);
        self.debounce = config.debounce();
        self.window_radius = config.window_radius;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn window_radius(mut self, window_radius: usize) -> Self {
        self.window_radius = window_radius;
        self
    }

    /// Keeps `tracker` busy while this controller waits on its source.
    pub fn busy_tracker(mut self, tracker: BusyTracker) -> Self {
        self.busy = Some(tracker);
        self
    }

    pub fn build(self) -> ListController<S> {
        ListController {
            inner: Arc::new(Inner {
                source: self.source,
                state: Mutex::new(ListQueryState::new(self.page_size)),
                debounce_slot: Mutex::new(DebounceSlot::default()),
                debounce: self.debounce,
                window_radius: self.window_radius,
                busy: self.busy,
            }),
        }
    }
}

/// Controller of one paged, searchable list.
///
/// Clones share the same state, token counter and debounce timer.
pub struct ListController<S: PageSource> {
    inner: Arc<Inner<S>>,
}

impl<S: PageSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> ListController<S>
where
    S: PageSource + 'static,
    S::Item: Clone + 'static,
{
    pub fn builder(source: S) -> ListControllerBuilder<S> {
        let defaults = ListConfig::default();
        ListControllerBuilder {
            source,
            page_size: defaults.page_size,
            debounce: defaults.debounce(),
            window_radius: defaults.window_radius,
            busy: None,
        }
    }

    /// Controller with the default page size, debounce and pager window.
    pub fn new(source: S) -> Self {
        Self::builder(source).build()
    }

    /// Fetches `page` of `query` and applies the result unless it is stale.
    pub async fn load(&self, query: &str, page: usize, page_size: usize) -> LoadOutcome {
        self.inner.load(query.to_string(), page, page_size).await
    }

    /// Navigates to `page`, ignoring requests outside `1..=total_pages`.
    ///
    /// Returns `None` without calling the source when the page is rejected.
    pub async fn go_to_page(&self, page: i64) -> Option<LoadOutcome> {
        let (target, query, page_size) = {
            let state = self.inner.state.lock();
            let Some(target) = navigation_target(page, state.pagination.total_pages) else {
                log::debug!(
                    "Ignoring navigation to page {page} of {}",
                    state.pagination.total_pages
                );
                return None;
            };
            (target, state.query.clone(), state.page_size)
        };

        Some(self.inner.load(query, target, page_size).await)
    }

    /// Loads the current page of the current query again.
    pub async fn refresh(&self) -> LoadOutcome {
        let (query, page, page_size) = {
            let state = self.inner.state.lock();
            (
                state.query.clone(),
                state.pagination.current_page.max(1),
                state.page_size,
            )
        };

        self.inner.load(query, page, page_size).await
    }

    /// Schedules a search for `text` once the debounce window has elapsed.
    ///
    /// Calling it again before then replaces the pending search. The search
    /// starts from the first page.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.lock().pending_query = Some(text.clone());

        let mut slot = self.inner.debounce_slot.lock();
        if let Some(handle) = slot.handle.take() {
            log::debug!("Rescheduling debounced search");
            handle.abort();
        }
        slot.generation += 1;

        let generation = slot.generation;
        let debounce = self.inner.debounce;
        let weak = Arc::downgrade(&self.inner);
        slot.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            fire_debounced(weak, generation, text).await;
        }));
    }

    /// Drops the pending debounced search, if any.
    pub fn cancel_pending(&self) {
        let mut slot = self.inner.debounce_slot.lock();
        if let Some(handle) = slot.handle.take() {
            handle.abort();
        }
        slot.generation += 1;
        self.inner.state.lock().pending_query = None;
    }

    pub fn snapshot(&self) -> ListQueryState<S::Item> {
        self.inner.state.lock().clone()
    }

    pub fn items(&self) -> Vec<S::Item> {
        self.inner.state.lock().items.clone()
    }

    pub fn pagination(&self) -> PageMeta {
        self.inner.state.lock().pagination
    }

    pub fn phase(&self) -> ListPhase {
        self.inner.state.lock().phase
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.lock().error.clone()
    }

    pub fn query(&self) -> String {
        self.inner.state.lock().query.clone()
    }

    pub fn request_token(&self) -> u64 {
        self.inner.state.lock().request_token
    }

    /// Pager entries for the current pagination.
    pub fn visible_pages(&self) -> Vec<PageLink> {
        let meta = self.pagination();
        visible_pages(meta.current_page, meta.total_pages, self.inner.window_radius)
    }

    /// View data with every item mapped to its table row.
    pub fn page_data<R>(&self) -> ListPageData<R>
    where
        for<'a> R: From<&'a S::Item>,
    {
        let state = self.inner.state.lock();
        ListPageData::from_state(&*state, self.inner.window_radius)
    }
}

async fn fire_debounced<S: PageSource>(weak: Weak<Inner<S>>, generation: u64, text: String) {
    // The view owning the controller may be gone by now.
    let Some(inner) = weak.upgrade() else {
        return;
    };

    {
        let mut slot = inner.debounce_slot.lock();
        if slot.generation != generation {
            return;
        }
        slot.handle = None;
    }

    let page_size = {
        let mut state = inner.state.lock();
        // A newer keystroke may already have replaced the pending text.
        if state.pending_query.as_deref() == Some(text.as_str()) {
            state.pending_query = None;
        }
        state.page_size
    };

    inner.load(text, 1, page_size).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Player;
    use crate::domain::types::PlayerId;
    use crate::pagination::PageResult;
    use crate::repository::errors::SourceError;
    use crate::repository::mock::MockPlayerSource;

    fn player(id: i32, name: &str) -> Player {
        Player {
            id: PlayerId::new(id).expect("valid player id"),
            name: name.to_string(),
            position: "Delantero".to_string(),
            club: None,
            nationality: None,
            market_value: Some(1_000_000),
            salary: None,
        }
    }

    fn page_of(names: &[&str], page: usize, total: usize) -> PageResult<Player> {
        let items = names
            .iter()
            .zip(1..)
            .map(|(name, id)| player(id, name))
            .collect();
        PageResult::new(items, page, 10, total)
    }

    #[tokio::test]
    async fn initial_state_is_idle_and_empty() {
        let controller = ListController::new(MockPlayerSource::new());

        let state = controller.snapshot();
        assert_eq!(state.phase, ListPhase::Idle);
        assert!(state.items.is_empty());
        assert_eq!(state.pagination, PageMeta::default());
        assert_eq!(state.request_token, 0);
        assert!(controller.visible_pages().is_empty());
    }

    #[tokio::test]
    async fn successful_load_replaces_items_and_pagination() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.page == 2 && request.query_str() == "pedri")
            .times(1)
            .returning(|_| Ok(page_of(&["Pedri"], 2, 11)));
        let controller = ListController::new(source);

        let outcome = controller.load("pedri", 2, 10).await;

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(controller.phase(), ListPhase::Success);
        assert!(!controller.is_loading());
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.pagination().current_page, 2);
        assert_eq!(controller.pagination().total_pages, 2);
        assert_eq!(controller.query(), "pedri");
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_data() {
        let mut source = MockPlayerSource::new();
        let mut calls = 0;
        source.expect_fetch_page().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(page_of(&["Gavi", "Pedri"], 1, 2))
            } else {
                Err(SourceError::Transport("connection reset".to_string()))
            }
        });
        let controller = ListController::new(source);

        controller.load("", 1, 10).await;
        let outcome = controller.refresh().await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(controller.phase(), ListPhase::Failed);
        assert_eq!(
            controller.error().as_deref(),
            Some("Transport error: connection reset")
        );
        assert_eq!(controller.items().len(), 2);
        assert_eq!(controller.pagination().total_items, 2);
    }

    #[tokio::test]
    async fn out_of_range_navigation_never_fetches() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_page()
            .times(1)
            .returning(|_| Ok(page_of(&["Gavi"], 1, 30)));
        let controller = ListController::new(source);
        controller.load("", 1, 10).await;
        let before = controller.snapshot();

        assert_eq!(controller.go_to_page(0).await, None);
        assert_eq!(controller.go_to_page(-2).await, None);
        assert_eq!(controller.go_to_page(4).await, None);

        let after = controller.snapshot();
        assert_eq!(after.pagination, before.pagination);
        assert_eq!(after.request_token, before.request_token);
    }

    #[tokio::test]
    async fn navigation_reuses_query_and_page_size() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.page == 1)
            .times(1)
            .returning(|_| Ok(PageResult::new(Vec::new(), 1, 5, 12)));
        source
            .expect_fetch_page()
            .withf(|request| {
                request.page == 3 && request.page_size == 5 && request.query_str() == "gavi"
            })
            .times(1)
            .returning(|_| Ok(PageResult::new(Vec::new(), 3, 5, 12)));
        let controller = ListController::new(source);

        controller.load("gavi", 1, 5).await;
        let outcome = controller.go_to_page(3).await;

        assert_eq!(outcome, Some(LoadOutcome::Applied));
        assert_eq!(controller.pagination().current_page, 3);
    }

    #[tokio::test]
    async fn rejected_payload_is_shown_normalized() {
        let mut source = MockPlayerSource::new();
        source.expect_fetch_page().returning(|_| {
            Err(SourceError::Rejected(
                serde_json::json!({ "error": "Sesión expirada" }),
            ))
        });
        let controller = ListController::new(source);

        controller.load("", 1, 10).await;

        assert_eq!(controller.error().as_deref(), Some("Sesión expirada"));
    }

    #[tokio::test]
    async fn firing_timer_keeps_newer_pending_text() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.query_str() == "Ped")
            .times(1)
            .returning(|_| Ok(page_of(&["Pedri"], 1, 1)));
        let controller = ListController::new(source);
        controller.inner.state.lock().pending_query = Some("Pedri".to_string());

        let generation = controller.inner.debounce_slot.lock().generation;
        fire_debounced(Arc::downgrade(&controller.inner), generation, "Ped".to_string()).await;

        let state = controller.snapshot();
        assert_eq!(state.pending_query.as_deref(), Some("Pedri"));
        assert_eq!(state.query, "Ped");
    }

    #[tokio::test]
    async fn club_list_renders_budget_rows() {
        use crate::domain::club::Club;
        use crate::domain::types::ClubId;
        use crate::dto::rows::ClubRow;
        use crate::repository::mock::MockClubSource;

        let mut source = MockClubSource::new();
        source.expect_fetch_page().times(1).returning(|request| {
            let club = Club {
                id: ClubId::new(3).expect("valid club id"),
                name: "Real Betis".to_string(),
                city: "Sevilla".to_string(),
                founded: Some(1907),
                budget: Some(95_000_000),
            };
            Ok(PageResult::new(vec![club], request.page, request.page_size, 1))
        });
        let controller = ListController::new(source);

        controller.load("betis", 1, 10).await;
        let data = controller.page_data::<ClubRow>();

        assert_eq!(data.rows[0].budget, "95.000.000 €");
        assert_eq!(data.summary, "Mostrando 1 a 1 de 1");
        assert_eq!(data.pages, vec![PageLink::Page(1)]);
        assert_eq!(data.search_query.as_deref(), Some("betis"));
        assert!(!data.loading);
    }
}
