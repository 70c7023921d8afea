#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use pdnsgrep_domain::DomainError;
use pdnsgrep_infrastructure::pdns::{HttpRequest, HttpResponse, HttpTransport};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock HttpTransport
// ============================================================================

/// Answers every request with the same canned response and records what
/// it was asked.
#[derive(Clone)]
pub struct MockTransport {
    response: Result<(u16, Bytes), DomainError>,
    requests: Arc<RwLock<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            response: Ok((status, Bytes::from(body.to_string()))),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn ok_json(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Err(error),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, DomainError> {
        self.requests.write().await.push(request.clone());
        self.response
            .clone()
            .map(|(status, body)| HttpResponse { status, body })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
