use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("current page {current_page} is larger than max page {max_page}")]
    InvalidPage { current_page: u64, max_page: u64 },
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl PaginationError {
    pub fn invalid_page(current_page: u64, max_page: u64) -> Self {
        Self::InvalidPage { current_page, max_page }
    }
}

impl From<serde_json::Error> for PaginationError {
    fn from(e: serde_json::Error) -> Self { Self::Serialize(e.to_string()) }
}
