//! # HTTP API Errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for record handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the record endpoints
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Body is empty or not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body parsed but does not fit the record schema
    #[error("{0}")]
    Schema(#[from] SchemaError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Schema(SchemaError::NotAnObject { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Schema(err) if err.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidBody(e.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
