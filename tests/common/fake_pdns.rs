#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use super::fixtures::API_KEY;

const SEARCH_PATH: &str = "/api/v1/servers/localhost/search-data";

/// Any `q` containing this fails with a 500.
pub const FAILING_MARKER: &str = "boom";

#[derive(Default)]
struct FakeState {
    responses: Mutex<HashMap<String, Vec<Value>>>,
    queries: Mutex<Vec<HashMap<String, String>>>,
    hits: AtomicUsize,
}

/// Minimal PowerDNS search-data endpoint on a random local port.
///
/// Patterns without a configured response answer 404, the way PowerDNS
/// reports "no matches".
pub struct FakePowerDns {
    addr: SocketAddr,
    state: Arc<FakeState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakePowerDns {
    pub async fn start() -> Result<Self, std::io::Error> {
        let state = Arc::new(FakeState::default());

        let app = Router::new()
            .route(SEARCH_PATH, get(search_data))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Sets (or replaces) what the server answers for pattern `q`.
    pub fn respond(&self, q: &str, items: Vec<Value>) -> &Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(q.to_string(), items);
        self
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Query parameters of every authorized request, in arrival order.
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for FakePowerDns {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn search_data(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == API_KEY);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    state.queries.lock().unwrap().push(params.clone());

    let q = params.get("q").cloned().unwrap_or_default();
    if q.contains(FAILING_MARKER) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    match state.responses.lock().unwrap().get(&q) {
        Some(items) => Json(Value::Array(items.clone())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
