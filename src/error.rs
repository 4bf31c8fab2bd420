//! API error taxonomy.
//!
//! Only two conditions ever leave a handler as an error: the catalog is not
//! loaded (`DataUnavailable`) or a lookup produced nothing (`NoMatch`).
//! Queries without usable keywords are not errors; they simply rank nothing.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The catalog failed to load at startup (or was never loaded).
    #[error("catalog unavailable: {0}")]
    DataUnavailable(String),
    /// A lookup, filter or search returned an empty result set.
    #[error("{0}")]
    NoMatch(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoMatch(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DataUnavailable(reason) => {
                tracing::error!("Rejecting request, catalog unavailable: {}", reason)
            }
            ApiError::NoMatch(detail) => tracing::debug!("No match: {}", detail),
        }

        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
