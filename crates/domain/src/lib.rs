//! pdnsgrep Domain Layer
pub mod changes;
pub mod config;
pub mod errors;
pub mod record_filter;
pub mod record_sort;
pub mod record_stats;
pub mod search_item;
pub mod search_pattern;
pub mod search_request;

pub use changes::records_equal;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use record_filter::filter_by_type;
pub use record_sort::{sort_records, SortField};
pub use record_stats::RecordStats;
pub use search_item::{ObjectType, SearchResultItem};
pub use search_pattern::normalize;
pub use search_request::{ObjectTypeFilter, SearchQuery, SearchRequest};
