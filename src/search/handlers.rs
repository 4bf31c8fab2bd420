use super::engine::rank;
use super::types::{SearchResponse, SearchResultItem};
use crate::catalog::store::CatalogState;
use crate::catalog::types::RecordView;
use crate::error::ApiError;
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

/// Maximum number of results returned by description search.
pub const SEARCH_LIMIT: usize = 50;

pub async fn handle_search_by_description(
    Extension(state): Extension<Arc<CatalogState>>,
    Path(description): Path<String>,
) -> Result<Json<SearchResponse>, ApiError> {
    let catalog = state.catalog()?;

    let matches = rank(&description, catalog);
    if matches.is_empty() {
        return Err(ApiError::NoMatch(format!(
            "No titles match: {}",
            description
        )));
    }

    let total_count = matches.len();
    let results: Vec<SearchResultItem> = matches
        .into_iter()
        .take(SEARCH_LIMIT)
        .filter_map(|m| {
            catalog.get(&m.record_id).map(|record| SearchResultItem {
                record: RecordView::from(record),
                score: m.score,
                keywords: m.keywords.into_iter().collect(),
            })
        })
        .collect();

    tracing::debug!(
        "Description search {:?}: {} matches, returning {}",
        description,
        total_count,
        results.len()
    );

    Ok(Json(SearchResponse {
        query: description,
        total_count,
        count: results.len(),
        results,
    }))
}
