#![allow(dead_code)]

use async_trait::async_trait;
use pdnsgrep_application::ports::SearchClient;
use pdnsgrep_domain::{DomainError, SearchRequest, SearchResultItem};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock SearchClient
// ============================================================================

#[derive(Clone)]
enum MockResponse {
    Items(Vec<SearchResultItem>),
    Error(DomainError),
}

/// Deterministic client keyed on the normalized pattern.
/// Unknown patterns answer with no results, like a 404 from the server.
#[derive(Clone, Default)]
pub struct MockSearchClient {
    responses: HashMap<String, MockResponse>,
    delays: HashMap<String, Duration>,
    requests: Arc<RwLock<Vec<SearchRequest>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, pattern: &str, items: Vec<SearchResultItem>) -> Self {
        self.responses
            .insert(pattern.to_string(), MockResponse::Items(items));
        self
    }

    pub fn with_error(mut self, pattern: &str, error: DomainError) -> Self {
        self.responses
            .insert(pattern.to_string(), MockResponse::Error(error));
        self
    }

    /// Holds the response for `pattern` back for `delay`.
    pub fn with_delay(mut self, pattern: &str, delay: Duration) -> Self {
        self.delays.insert(pattern.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn requests(&self) -> Vec<SearchRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResultItem>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.write().await.push(request.clone());

        if let Some(delay) = self.delays.get(request.pattern.as_ref()) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(request.pattern.as_ref()) {
            Some(MockResponse::Items(items)) => Ok(items.clone()),
            Some(MockResponse::Error(error)) => Err(error.clone()),
            None => Ok(Vec::new()),
        }
    }
}

/// `count` distinct records whose names start with `prefix`.
pub fn sentinel_items(prefix: &str, count: usize) -> Vec<SearchResultItem> {
    (0..count)
        .map(|i| {
            SearchResultItem::record(
                format!("{prefix}-{i}.example.com."),
                "A",
                format!("10.0.{}.{}", i / 256, i % 256),
                "example.com.",
                300,
            )
        })
        .collect()
}
