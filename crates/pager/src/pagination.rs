//! Pagination metadata for list endpoints
//!
//! A `Pager` holds the page size and the width of the displayed page window.
//! `Pager::paginate` turns a total result count and a requested page into a
//! freshly built `PageState`; the pager itself is never mutated by a
//! calculation, so one instance can serve any number of callers.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use configs::PagerConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::PaginationError;

pub const DEFAULT_RESULTS_PER_PAGE: u64 = 50;
pub const DEFAULT_PAGE_RANGE: u64 = 2;
pub const DEFAULT_INDEX: &str = "page";

const MIN_PAGE: u64 = 1;

/// Pagination configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    results_per_page: u64,
    page_range: u64,
    index: String,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            page_range: DEFAULT_PAGE_RANGE,
            index: DEFAULT_INDEX.to_string(),
        }
    }
}

impl Pager {
    /// Build a pager; arguments follow the same fallback rules as [`Pager::configure`].
    pub fn new(results_per_page: Option<u64>, page_range: Option<u64>, index: Option<&str>) -> Self {
        let mut pager = Self::default();
        pager.configure(results_per_page, page_range, index);
        pager
    }

    pub fn from_config(cfg: &PagerConfig) -> Self {
        Self::new(cfg.results_per_page, cfg.page_range, cfg.index.as_deref())
    }

    /// Replace the whole configuration.
    ///
    /// - `None` reverts a field to its default
    /// - `results_per_page = Some(0)` reverts to the default
    /// - `page_range = Some(0)` is kept: the window shows the current page only
    /// - a blank `index` reverts to the default
    pub fn configure(
        &mut self,
        results_per_page: Option<u64>,
        page_range: Option<u64>,
        index: Option<&str>,
    ) -> &mut Self {
        self.results_per_page = match results_per_page {
            Some(0) => {
                warn!(fallback = DEFAULT_RESULTS_PER_PAGE, "results_per_page must be positive; using default");
                DEFAULT_RESULTS_PER_PAGE
            }
            Some(n) => n,
            None => DEFAULT_RESULTS_PER_PAGE,
        };
        self.page_range = page_range.unwrap_or(DEFAULT_PAGE_RANGE);
        self.index = match index.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_INDEX.to_string(),
        };
        self
    }

    pub fn results_per_page(&self) -> u64 { self.results_per_page }

    pub fn page_range(&self) -> u64 { self.page_range }

    /// Name of the request parameter carrying the page number.
    pub fn index(&self) -> &str { &self.index }

    /// Compute the pagination state for `result_count` items.
    ///
    /// A missing or zero `current_page` means page 1. Fails with
    /// [`PaginationError::InvalidPage`] when the page lies past the last page;
    /// a result set that fits on one page only accepts page 1.
    pub fn paginate(&self, result_count: u64, current_page: Option<u64>) -> Result<PageState, PaginationError> {
        let current_page = normalize_page(current_page);
        let max_page = self.last_page(result_count);
        if current_page > max_page {
            debug!(result_count, current_page, max_page, "requested page is past the last page");
            return Err(PaginationError::invalid_page(current_page, max_page));
        }
        Ok(self.build_state(result_count, current_page))
    }

    /// Like [`Pager::paginate`], but pulls an out-of-range page back to the last page.
    pub fn paginate_clamped(&self, result_count: u64, current_page: Option<u64>) -> PageState {
        let max_page = self.last_page(result_count);
        let current_page = normalize_page(current_page).min(max_page);
        self.build_state(result_count, current_page)
    }

    fn last_page(&self, result_count: u64) -> u64 {
        if result_count <= self.results_per_page {
            MIN_PAGE
        } else {
            result_count.div_ceil(self.results_per_page)
        }
    }

    // `current_page` must already lie in `MIN_PAGE..=last_page(result_count)`.
    fn build_state(&self, result_count: u64, current_page: u64) -> PageState {
        let state = if result_count <= self.results_per_page {
            PageState {
                pagination_enabled: false,
                current_page,
                result_count,
                results_per_page: self.results_per_page,
                query_skip: 0,
                min_page: MIN_PAGE,
                max_page: MIN_PAGE,
                low_page: MIN_PAGE,
                high_page: MIN_PAGE,
            }
        } else {
            let max_page = self.last_page(result_count);
            PageState {
                pagination_enabled: true,
                current_page,
                result_count,
                results_per_page: self.results_per_page,
                query_skip: (current_page - 1) * self.results_per_page,
                min_page: MIN_PAGE,
                max_page,
                low_page: current_page.saturating_sub(self.page_range).max(MIN_PAGE),
                high_page: current_page.saturating_add(self.page_range).min(max_page),
            }
        };
        debug!(
            result_count,
            current_page,
            enabled = state.pagination_enabled,
            skip = state.query_skip,
            max_page = state.max_page,
            low_page = state.low_page,
            high_page = state.high_page,
            "pagination computed"
        );
        state
    }
}

fn normalize_page(current_page: Option<u64>) -> u64 {
    match current_page {
        None | Some(0) => MIN_PAGE,
        Some(page) => page,
    }
}

/// Result of one pagination calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// false when every result fits on a single page
    pub pagination_enabled: bool,
    pub current_page: u64,
    pub result_count: u64,
    pub results_per_page: u64,
    /// offset to pass to the data query
    pub query_skip: u64,
    pub min_page: u64,
    pub max_page: u64,
    /// first page of the displayed window
    pub low_page: u64,
    /// last page of the displayed window
    pub high_page: u64,
}

/// Flat view of a [`PageState`] for API responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub current: u64,
    pub prev: u64,
    pub next: u64,
    pub skip: u64,
    pub min: u64,
    pub max: u64,
}

impl PageState {
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            current: self.current_page,
            prev: self.current_page.saturating_sub(1).max(self.min_page),
            next: self.current_page.saturating_add(1).min(self.max_page),
            skip: self.query_skip,
            min: self.min_page,
            max: self.max_page,
        }
    }

    /// Same data as [`PageState::summary`], keyed by field name.
    pub fn to_map(&self) -> BTreeMap<&'static str, u64> {
        let s = self.summary();
        BTreeMap::from([
            ("current", s.current),
            ("prev", s.prev),
            ("next", s.next),
            ("skip", s.skip),
            ("min", s.min),
            ("max", s.max),
        ])
    }

    /// JSON encoding of [`PageState::summary`].
    pub fn to_text(&self) -> Result<String, PaginationError> {
        Ok(serde_json::to_string(&self.summary())?)
    }

    /// Page numbers of the displayed window.
    pub fn pages(&self) -> RangeInclusive<u64> { self.low_page..=self.high_page }

    pub fn has_prev(&self) -> bool { self.current_page > self.min_page }

    pub fn has_next(&self) -> bool { self.current_page < self.max_page }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.summary()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
