//! pdnsgrep Infrastructure Layer
//!
//! HTTP access to the PowerDNS API behind the application's `SearchClient` port.
pub mod pdns;

pub use pdns::client::PowerDnsClient;
pub use pdns::transport::https::HttpsTransport;
