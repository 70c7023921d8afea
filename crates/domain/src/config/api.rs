use serde::{Deserialize, Serialize};
use std::time::Duration;

/// PowerDNS API endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the PowerDNS API, e.g. "https://pdns.example.com:8081"
    #[serde(default)]
    pub url: String,

    /// Value sent in the `X-API-Key` header
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
