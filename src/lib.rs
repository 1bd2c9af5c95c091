//! Pagination metadata: page size, skip offset, last page and the window of
//! page numbers to display, computed from a result count and a requested page.
//!
//! ```
//! use paginate::Pager;
//!
//! let state = Pager::default().paginate(1000, Some(4)).unwrap();
//! assert_eq!(state.query_skip, 150);
//! assert_eq!(state.pages(), 2..=6);
//! ```

pub use common::utils::logging;
pub use configs::{AppConfig, PagerConfig};
pub use pager::{
    PageState, PageSummary, Pager, PaginationError, DEFAULT_INDEX, DEFAULT_PAGE_RANGE,
    DEFAULT_RESULTS_PER_PAGE,
};

/// Build a pager from `config.toml` (or `CONFIG_PATH`) plus `PAGER_*` environment overrides.
///
/// A missing file is not an error; the pager defaults apply.
pub fn pager_from_env() -> anyhow::Result<Pager> {
    let cfg = AppConfig::load_and_validate()?;
    let pager = Pager::from_config(&cfg.pager);
    tracing::info!(
        results_per_page = pager.results_per_page(),
        page_range = pager.page_range(),
        index = pager.index(),
        "pager configured"
    );
    Ok(pager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_exposes_pager() {
        let state = Pager::default().paginate(10, None).expect("single page");
        assert!(!state.pagination_enabled);
        assert_eq!(state.to_string(), r#"{"current":1,"prev":1,"next":1,"skip":0,"min":1,"max":1}"#);
    }

    #[test]
    fn pager_from_env_without_config_file() -> anyhow::Result<()> {
        logging::init_logging_default();
        if std::env::var("CONFIG_PATH").is_ok() || std::env::var(configs::ENV_RESULTS_PER_PAGE).is_ok() {
            return Ok(());
        }
        let pager = pager_from_env()?;
        assert_eq!(pager.results_per_page(), DEFAULT_RESULTS_PER_PAGE);
        Ok(())
    }
}
