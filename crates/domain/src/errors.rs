use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    RequestTimeout(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to decode search response: {0}")]
    Decode(String),

    #[error("Search cancelled")]
    Cancelled,

    #[error("Search task failed: {0}")]
    TaskFailed(String),

    #[error("At least one search term is required")]
    NoSearchTerms,

    #[error("invalid sort field: {0} (valid options: name, zone, ttl, type)")]
    InvalidSortField(String),

    #[error("invalid object type: {0} (valid options: all, zone, record, comment)")]
    InvalidObjectType(String),
}
