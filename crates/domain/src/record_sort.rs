use super::errors::DomainError;
use super::search_item::SearchResultItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column used to order results for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Zone,
    Ttl,
    Type,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Zone => "zone",
            SortField::Ttl => "ttl",
            SortField::Type => "type",
        }
    }

    fn compare(&self, a: &SearchResultItem, b: &SearchResultItem) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Zone => a.zone.cmp(&b.zone).then_with(|| a.name.cmp(&b.name)),
            SortField::Ttl => a.ttl.cmp(&b.ttl).then_with(|| a.name.cmp(&b.name)),
            SortField::Type => a
                .record_type
                .cmp(&b.record_type)
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "zone" => Ok(SortField::Zone),
            "ttl" => Ok(SortField::Ttl),
            "type" => Ok(SortField::Type),
            _ => Err(DomainError::InvalidSortField(s.to_string())),
        }
    }
}

/// Stable in-place sort; every field except `name` falls back to the name.
pub fn sort_records(items: &mut [SearchResultItem], field: SortField) {
    items.sort_by(|a, b| field.compare(a, b));
}
