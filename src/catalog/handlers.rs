use super::store::CatalogState;
use super::types::{CategoryResponse, ListResponse, RecordView};
use crate::error::ApiError;
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

/// Maximum number of records returned by the full listing.
pub const LIST_LIMIT: usize = 100;

pub async fn handle_list_titles(
    Extension(state): Extension<Arc<CatalogState>>,
) -> Result<Json<ListResponse>, ApiError> {
    let catalog = state.catalog()?;

    let results: Vec<RecordView> = catalog.iter().take(LIST_LIMIT).map(RecordView::from).collect();

    Ok(Json(ListResponse {
        total_count: catalog.len(),
        count: results.len(),
        message: format!("Showing the first {} titles", LIST_LIMIT),
        results,
    }))
}

pub async fn handle_get_title(
    Extension(state): Extension<Arc<CatalogState>>,
    Path(show_id): Path<String>,
) -> Result<Json<RecordView>, ApiError> {
    let catalog = state.catalog()?;

    catalog
        .get(&show_id)
        .map(|record| Json(RecordView::from(record)))
        .ok_or_else(|| ApiError::NoMatch(format!("No title with ID: {}", show_id)))
}

pub async fn handle_titles_by_category(
    Extension(state): Extension<Arc<CatalogState>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let catalog = state.catalog()?;

    let results: Vec<RecordView> = catalog
        .filter_by_category(&category)
        .into_iter()
        .map(RecordView::from)
        .collect();

    if results.is_empty() {
        return Err(ApiError::NoMatch(format!(
            "No titles in category: {}",
            category
        )));
    }

    tracing::debug!("Category {:?} matched {} titles", category, results.len());

    Ok(Json(CategoryResponse {
        category,
        total_count: results.len(),
        count: results.len(),
        results,
    }))
}
