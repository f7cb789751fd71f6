//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Bad request from the client.
    #[error("{0}")]
    BadRequest(String),
    /// The endpoint needs an authenticated user.
    #[error("Authentication required")]
    Unauthorized,
    /// Content store error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Catalog(err) => catalog_error_status(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

fn catalog_error_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound { .. } | CatalogError::UnknownEntity { .. } => {
            StatusCode::NOT_FOUND
        }
        CatalogError::InvalidRating(_) => StatusCode::BAD_REQUEST,
        CatalogError::Storage(msg) => {
            tracing::error!(error = %msg, "content store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
