//! Configuration module for pdnsgrep
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `api`: PowerDNS API endpoint, credential and request timeout
//! - `search`: Default object-type filter, record type and sort order
//! - `output`: Output format and rendering switches
//! - `watch`: Polling interval for watch mode
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod api;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;
pub mod search;
pub mod watch;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
pub use search::SearchConfig;
pub use watch::WatchConfig;
