use crate::catalog::types::RecordView;
use serde::Serialize;

/// Response for `GET /titles/description/:description`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Number of matching titles before truncation.
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

/// A full record annotated with how it matched the query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultItem {
    #[serde(flatten)]
    pub record: RecordView,
    pub score: usize,
    pub keywords: Vec<String>,
}
