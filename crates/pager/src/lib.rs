//! Pagination calculator.
//! - `Pager` holds page size, window range and the page parameter name.
//! - `Pager::paginate` derives skip offset, last page and the displayed page window.
//! - `PageState` projects into a flat summary / JSON for API responses.

pub mod errors;
pub mod pagination;

pub use errors::PaginationError;
pub use pagination::{
    PageState, PageSummary, Pager, DEFAULT_INDEX, DEFAULT_PAGE_RANGE, DEFAULT_RESULTS_PER_PAGE,
};
