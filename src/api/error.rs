//! HTTP error responses.
//!
//! Every failure leaves the API as `{"error": "...", "status": code}`. Server-side
//! errors are logged in full and reach the client only as a generic message.

use crate::errors::Error;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned to clients in place of any 500 cause
const INTERNAL_ERROR_MESSAGE: &str = "an internal error occurred";

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// An error already classified into an HTTP status class
#[derive(Debug)]
pub enum ApiError {
    /// Rejected input (400)
    BadRequest(String),
    /// Missing resource (404)
    NotFound(String),
    /// Anything the caller cannot fix (500); the message is logged, never sent
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if !err.is_client_error() {
            return Self::Internal(err.to_string());
        }
        match err {
            Error::NotFound { .. } => Self::NotFound(err.to_string()),
            _ => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => {
                // Log the actual error, return generic message
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
