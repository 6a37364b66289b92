//! API error type and its HTTP mapping

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gpd_common::summarize::SummarizeError;
use serde_json::json;
use tracing::error;

/// Errors returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Optional collaborator (speech analysis) not available
    Unavailable(String),
    Internal(String),
}

impl From<gpd_common::Error> for ApiError {
    fn from(err: gpd_common::Error) -> Self {
        match err {
            gpd_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            gpd_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Unavailable => ApiError::Unavailable(err.to_string()),
            SummarizeError::UnknownModel(_) => ApiError::BadRequest(err.to_string()),
            SummarizeError::Backend(msg) => ApiError::Internal(format!("Speech analysis failed: {}", msg)),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
