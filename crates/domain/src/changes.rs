use super::search_item::SearchResultItem;

/// Order-sensitive comparison of two result sets, used to detect changes
/// between polling ticks. Item equality ignores `zone` and `object_type`.
pub fn records_equal(a: &[SearchResultItem], b: &[SearchResultItem]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
