use super::search_item::SearchResultItem;

/// Keeps the items whose record type matches `record_type`, ignoring case.
/// Input order is preserved.
///
/// Case folding is ASCII-only; record type mnemonics are always ASCII.
pub fn filter_by_type(items: &[SearchResultItem], record_type: &str) -> Vec<SearchResultItem> {
    items
        .iter()
        .filter(|item| item.record_type.eq_ignore_ascii_case(record_type))
        .cloned()
        .collect()
}
