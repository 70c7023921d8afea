use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Classification of a search match as reported by the PowerDNS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Record,
    Zone,
    Comment,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Record => "record",
            ObjectType::Zone => "zone",
            ObjectType::Comment => "comment",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matched DNS object returned by the search-data endpoint.
///
/// Zone matches come back without `type`, `content`, `zone` and `ttl`,
/// so those fields fall back to their defaults when absent.
///
/// Equality only looks at `name`, `type`, `content` and `ttl`. Two results
/// that differ only in `zone` or `object_type` compare equal, which is what
/// watch mode uses to decide whether anything changed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResultItem {
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: String,

    #[serde(default)]
    pub content: String,

    pub object_type: ObjectType,

    #[serde(default)]
    pub zone: String,

    /// Seconds; zero for zone and comment matches.
    #[serde(default)]
    pub ttl: u32,
}

impl SearchResultItem {
    pub fn record(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
        zone: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            object_type: ObjectType::Record,
            zone: zone.into(),
            ttl,
        }
    }

    pub fn zone(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            zone: name.clone(),
            name,
            record_type: String::new(),
            content: String::new(),
            object_type: ObjectType::Zone,
            ttl: 0,
        }
    }
}

impl PartialEq for SearchResultItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.record_type == other.record_type
            && self.content == other.content
            && self.ttl == other.ttl
    }
}

impl Eq for SearchResultItem {}

impl Hash for SearchResultItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.record_type.hash(state);
        self.content.hash(state);
        self.ttl.hash(state);
    }
}
