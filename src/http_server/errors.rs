//! API errors
//!
//! The three-way error taxonomy for customer endpoints: validation failures
//! (client, 400), missing rows (client, 404), and engine failures
//! (infrastructure, 500). Store failures are logged once here and their
//! message surfaced verbatim in the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for customer endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Customer endpoint errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A field failed its syntactic check (detected before any store access)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No row with the requested id
    #[error("Customer not found")]
    NotFound,

    /// Engine-level failure, terminal for the request
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(ref err) = self {
            tracing::error!(error = %err, "store operation failed");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
