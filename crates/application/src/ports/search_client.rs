use async_trait::async_trait;
use pdnsgrep_domain::{DomainError, SearchRequest, SearchResultItem};

/// Port to the remote search-data endpoint.
///
/// Implementations perform exactly one request per call and never retry.
/// A "no matches" answer from the server must come back as an empty
/// vector rather than an error.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResultItem>, DomainError>;
}
