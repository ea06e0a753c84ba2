//! # API Errors
//!
//! Every handler failure is turned into a JSON body `{"error", "code"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::export::ExportError;
use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request handling errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required JSON fields absent or null
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Body is not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path parameter could not be parsed
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ApiError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingFields(_) => 400,
            ApiError::InvalidBody(_) => 400,
            ApiError::InvalidPath(_) => 400,
            ApiError::Store(e) => e.status_code(),
            ApiError::Export(e) => e.status_code(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ApiError::MissingFields(vec!["name", "description"]);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Missing required field(s): name, description");
    }

    #[test]
    fn test_store_errors_keep_their_status() {
        assert_eq!(ApiError::from(StoreError::TestCaseNotFound(1)).status_code(), 404);
        assert_eq!(
            ApiError::from(StoreError::Database(sqlx::Error::PoolClosed)).status_code(),
            500
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::InvalidPath("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
