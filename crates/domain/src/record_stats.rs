use super::search_item::SearchResultItem;
use std::collections::BTreeMap;

/// Per-type and per-zone counts over a result set, keys in lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_zone: BTreeMap<String, usize>,
}

impl RecordStats {
    pub fn from_records(items: &[SearchResultItem]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            *stats.by_type.entry(item.record_type.clone()).or_default() += 1;
            *stats.by_zone.entry(item.zone.clone()).or_default() += 1;
        }

        stats
    }
}
