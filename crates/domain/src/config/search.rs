use crate::record_sort::SortField;
use crate::search_request::ObjectTypeFilter;
use serde::{Deserialize, Serialize};

/// Defaults applied to every search unless overridden on the command line
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub object_type: ObjectTypeFilter,

    /// Only keep results of this record type (case-insensitive)
    #[serde(default)]
    pub record_type: Option<String>,

    #[serde(default)]
    pub sort_by: Option<SortField>,
}
