use super::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use pdnsgrep_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport; the timeout covers the whole request,
/// body included.
pub struct HttpsTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn map_reqwest_error(url: &str, timeout: Duration, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::RequestTimeout(format!("{} after {}s", url, timeout.as_secs()))
    } else {
        DomainError::Transport(format!("{}: {}", url, e))
    }
}

#[async_trait]
impl HttpTransport for HttpsTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, DomainError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_error(&request.url, self.timeout, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(&request.url, self.timeout, e))?;

        debug!(
            url = %request.url,
            status,
            body_len = body.len(),
            "API response received"
        );

        Ok(HttpResponse { status, body })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}
