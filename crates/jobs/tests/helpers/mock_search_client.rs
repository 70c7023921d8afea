#![allow(dead_code)]

use async_trait::async_trait;
use pdnsgrep_application::ports::SearchClient;
use pdnsgrep_domain::{DomainError, SearchRequest, SearchResultItem};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Mock SearchClient returning a scripted sequence
// ============================================================================

/// Answers the n-th call with the n-th scripted response and keeps repeating
/// the last one afterwards.
#[derive(Clone)]
pub struct SequencedSearchClient {
    responses: Arc<Vec<Result<Vec<SearchResultItem>, DomainError>>>,
    call_count: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl SequencedSearchClient {
    pub fn new(responses: Vec<Result<Vec<SearchResultItem>, DomainError>>) -> Self {
        assert!(!responses.is_empty(), "at least one response is required");
        Self {
            responses: Arc::new(responses),
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Every call waits this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchClient for SequencedSearchClient {
    async fn search(&self, _request: &SearchRequest) -> Result<Vec<SearchResultItem>, DomainError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let index = call.min(self.responses.len() - 1);
        self.responses[index].clone()
    }
}

pub fn record(name: &str, content: &str) -> SearchResultItem {
    SearchResultItem::record(name, "A", content, "example.com.", 300)
}
