//! Listing queries: free-text search, status filter and pagination

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};

/// Page sizes offered by list views
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Status filter value that disables status filtering
pub const ALL_STATUSES: &str = "all";

/// Query parameters for a list view
///
/// All parameters have sensible defaults: no search term, every status,
/// first page, five rows.
///
/// # Example
/// ```rust,ignore
/// let query = ListQuery::new().search("acme").status("paid").page(2);
/// let page = query.apply(invoices);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListQuery {
    /// Search term, matched case-insensitively against the entity's search fields
    pub search: String,

    /// Status to keep; `None` or `"all"` keeps everything
    pub status: Option<String>,

    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Rows per page, at least 1
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Whether a record passes the search term and status filter
    pub fn matches<T: Entity>(&self, record: &T) -> bool {
        let status_ok = match self.status.as_deref() {
            None | Some(ALL_STATUSES) => true,
            Some(wanted) => record.status().as_deref() == Some(wanted),
        };
        status_ok && record.matches_term(&self.search)
    }

    /// Filter records, keeping their order
    pub fn filter<T: Entity>(&self, records: Vec<T>) -> Vec<T> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    /// Filter then paginate
    pub fn apply<T: Entity>(&self, records: Vec<T>) -> Page<T> {
        paginate(self.filter(records), self.page, self.effective_page_size())
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The rows on this page
    pub items: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page after clamping (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, never below 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute metadata, clamping `page` into `[1, total_pages]`
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index range of this page within the filtered set
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    /// 1-based `(first, last)` row numbers shown as "first-last of total".
    ///
    /// `None` for an empty listing.
    pub fn row_span(&self) -> Option<(usize, usize)> {
        if self.total == 0 {
            return None;
        }
        let range = self.range();
        Some((range.start + 1, range.end))
    }

    /// Page-number bar for this page
    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page, self.total_pages)
    }
}

/// Slice `items` to the requested page, clamping out-of-range pages
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let pagination = PaginationMeta::new(page, page_size, items.len());
    let range = pagination.range();
    let items = items
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect();
    Page { items, pagination }
}

/// Entry of a page-number bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

/// Page-number bar: every page up to 7, otherwise first, last and a
/// window around `current`, with ellipses for the gaps
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);

    if total_pages <= 7 {
        return (1..=total_pages).map(PageLink::Number).collect();
    }

    let mut links = vec![PageLink::Number(1)];
    if current > 3 {
        links.push(PageLink::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    links.extend((start..=end).map(PageLink::Number));
    if current + 2 < total_pages {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Number(total_pages));
    links
}
