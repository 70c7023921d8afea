use super::transport::https::HttpsTransport;
use super::transport::{HttpRequest, HttpTransport};
use async_trait::async_trait;
use pdnsgrep_application::ports::SearchClient;
use pdnsgrep_domain::config::ApiConfig;
use pdnsgrep_domain::{DomainError, SearchRequest, SearchResultItem};
use tracing::debug;

pub const SEARCH_PATH: &str = "/api/v1/servers/localhost/search-data";

/// Upper bound sent as `max`; the API is asked for every match in one page.
pub const MAX_RESULTS: u64 = 9_999_999;

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

/// Client for the PowerDNS search-data endpoint.
pub struct PowerDnsClient<T = HttpsTransport> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl PowerDnsClient<HttpsTransport> {
    pub fn from_config(config: &ApiConfig) -> Result<Self, DomainError> {
        let transport = HttpsTransport::new(config.timeout())?;
        Ok(Self::with_transport(&config.url, &config.token, transport))
    }
}

impl<T: HttpTransport> PowerDnsClient<T> {
    pub fn with_transport(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            transport,
        }
    }

    pub fn build_search_request(&self, request: &SearchRequest) -> HttpRequest {
        HttpRequest::get(format!("{}{}", self.base_url, SEARCH_PATH))
            .query("q", &request.pattern)
            .query("object_type", request.object_type)
            .query("max", MAX_RESULTS)
            .header("Accept", "application/json")
            .header("X-API-Key", self.api_key.as_str())
    }
}

#[async_trait]
impl<T: HttpTransport> SearchClient for PowerDnsClient<T> {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResultItem>, DomainError> {
        let http_request = self.build_search_request(request);

        debug!(
            url = %http_request.url,
            q = %request.pattern,
            object_type = %request.object_type,
            max = MAX_RESULTS,
            protocol = self.transport.protocol_name(),
            "Requesting search-data"
        );

        let response = self.transport.get(&http_request).await?;

        match response.status {
            STATUS_OK => decode_items(&response.body),
            // The API answers 404 when nothing matches.
            STATUS_NOT_FOUND => Ok(Vec::new()),
            status => Err(DomainError::UnexpectedStatus(status)),
        }
    }
}

fn decode_items(body: &[u8]) -> Result<Vec<SearchResultItem>, DomainError> {
    serde_json::from_slice(body).map_err(|e| DomainError::Decode(e.to_string()))
}
