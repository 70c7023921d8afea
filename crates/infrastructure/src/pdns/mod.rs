pub mod client;
pub mod transport;

pub use client::{PowerDnsClient, MAX_RESULTS, SEARCH_PATH};
pub use transport::{HttpRequest, HttpResponse, HttpTransport};
