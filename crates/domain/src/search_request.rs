use super::errors::DomainError;
use super::record_sort::SortField;
use super::search_pattern::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which kind of object the search-data endpoint should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectTypeFilter {
    #[default]
    All,
    Zone,
    Record,
    Comment,
}

impl ObjectTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectTypeFilter::All => "all",
            ObjectTypeFilter::Zone => "zone",
            ObjectTypeFilter::Record => "record",
            ObjectTypeFilter::Comment => "comment",
        }
    }
}

impl fmt::Display for ObjectTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectTypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "all" => Ok(ObjectTypeFilter::All),
            "zone" => Ok(ObjectTypeFilter::Zone),
            "record" => Ok(ObjectTypeFilter::Record),
            "comment" => Ok(ObjectTypeFilter::Comment),
            _ => Err(DomainError::InvalidObjectType(s.to_string())),
        }
    }
}

/// A single call against the search endpoint.
/// Uses `Arc<str>` so the pattern can be shared with the spawned search unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub pattern: Arc<str>,
    pub object_type: ObjectTypeFilter,
}

impl SearchRequest {
    pub fn new(pattern: impl Into<Arc<str>>, object_type: ObjectTypeFilter) -> Self {
        Self {
            pattern: pattern.into(),
            object_type,
        }
    }

    /// Builds the request for a raw user term.
    pub fn for_term(term: &str, object_type: ObjectTypeFilter) -> Self {
        Self::new(normalize(term), object_type)
    }
}

/// Everything one invocation asks for: the raw terms plus post-processing.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub terms: Vec<String>,
    pub object_type: ObjectTypeFilter,
    pub record_type: Option<String>,
    pub sort_by: Option<SortField>,
}

impl SearchQuery {
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            ..Default::default()
        }
    }

    pub fn with_object_type(mut self, object_type: ObjectTypeFilter) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_record_type(mut self, record_type: Option<String>) -> Self {
        self.record_type = record_type.filter(|t| !t.is_empty());
        self
    }

    pub fn with_sort(mut self, sort_by: Option<SortField>) -> Self {
        self.sort_by = sort_by;
        self
    }
}
