//! # HTTP error boundary
//!
//! Maps controller failures onto status codes. Not-found is answered with a
//! bare 404; everything else carries a small JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use items_core::{RepositoryError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Result type for controller operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The id in the route does not resolve to a stored item
    #[error("item not found")]
    NotFound,

    /// The payload parsed but failed domain checks
    #[error("invalid item: {0}")]
    Validation(#[from] ValidationError),

    /// The repository could not complete the call
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::NotFound => return status.into_response(),
            ApiError::Repository(err) => tracing::error!(error = %err, "repository call failed"),
            ApiError::Validation(err) => tracing::debug!(error = %err, "rejected payload"),
        }
        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
