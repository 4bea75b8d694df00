use serde::{Deserialize, Serialize, Serializer};

use crate::DEFAULT_WINDOW_RADIUS;

/// Page sets up to this size are rendered without any ellipsis.
const COMPACT_PAGE_COUNT: usize = 5;

/// Entry of the pager: either a clickable page or an elided range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl PageLink {
    /// Returns the page number, `None` for an ellipsis.
    pub const fn page(self) -> Option<usize> {
        match self {
            PageLink::Page(page) => Some(page),
            PageLink::Ellipsis => None,
        }
    }
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(page) => serializer.serialize_u64(*page as u64),
            PageLink::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Pagination metadata of one page of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// One-based index of the first item shown ("showing 21 to 30 of 100").
    pub start_item: usize,
    /// One-based index of the last item shown, 0 when the list is empty.
    pub end_item: usize,
}

/// Computes the metadata for `current_page` of a list with `total_items`.
///
/// A zero page or page size is read as 1.
pub fn compute_meta(current_page: usize, page_size: usize, total_items: usize) -> PageMeta {
    let current_page = if current_page == 0 { 1 } else { current_page };
    let page_size = page_size.max(1);

    let total_pages = if total_items == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let (start_item, end_item) = if total_items == 0 {
        (1, 0)
    } else {
        (
            (current_page - 1)
                .saturating_mul(page_size)
                .saturating_add(1),
            current_page.saturating_mul(page_size).min(total_items),
        )
    };

    PageMeta {
        current_page,
        page_size,
        total_items,
        total_pages,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
        start_item,
        end_item,
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<PageLink> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, last_page);
    let mut pages = Vec::new();

    let left_end = left_edge.saturating_add(1).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(PageLink::Page));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page.saturating_add(1));

    if mid_start > left_end {
        pages.push(PageLink::Ellipsis);
    }
    pages.extend((mid_start..mid_end).map(PageLink::Page));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge).saturating_add(1));

    if right_start > mid_end {
        pages.push(PageLink::Ellipsis);
    }
    pages.extend((right_start..=last_page).map(PageLink::Page));

    pages
}

/// Returns the pages a pager should render around `current_page`.
///
/// Up to five pages are listed verbatim. Larger sets always keep the first
/// and the last page plus `window_radius` pages on each side of the current
/// one, and collapse every gap wider than one page into a single
/// [`PageLink::Ellipsis`].
pub fn visible_pages(
    current_page: usize,
    total_pages: usize,
    window_radius: usize,
) -> Vec<PageLink> {
    if total_pages <= COMPACT_PAGE_COUNT {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    get_pages(total_pages, current_page, 1, window_radius, window_radius, 1)
}

/// [`visible_pages`] with the default window radius.
pub fn default_visible_pages(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    visible_pages(current_page, total_pages, DEFAULT_WINDOW_RADIUS)
}

/// Validates a navigation request; only `1..=total_pages` is reachable.
pub fn navigation_target(requested: i64, total_pages: usize) -> Option<usize> {
    let page = usize::try_from(requested).ok()?;
    (1..=total_pages).contains(&page).then_some(page)
}

/// One page of items together with its pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, current_page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            items,
            meta: compute_meta(current_page, page_size, total_items),
        }
    }

    /// Result of a list that was never loaded: no items, zeroed metadata.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
        }
    }

    /// Pages to render in the pager for this result.
    pub fn pages(&self, window_radius: usize) -> Vec<PageLink> {
        visible_pages(self.meta.current_page, self.meta.total_pages, window_radius)
    }
}
