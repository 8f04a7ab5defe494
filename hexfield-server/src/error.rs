//! Server error types with HTTP status code mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hexfield_core::GridError;
use serde::Serialize;
use thiserror::Error;

/// Server error type that wraps core errors and provides HTTP status
/// mapping.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Grid/query layer error
    #[error("{0}")]
    Grid(#[from] GridError),

    /// Missing required query parameter
    #[error("missing required query parameter: {0}")]
    MissingParam(&'static str),
}

impl ServerError {
    /// Map error to HTTP status code.
    ///
    /// Every `GridError` is a caller-input error, so the whole taxonomy
    /// maps to 400. Queries are deterministic pure reads; nothing here
    /// warrants a retry or a 5xx.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Grid(_) => StatusCode::BAD_REQUEST,
            ServerError::MissingParam(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Human-readable detail message
    pub error: String,
    /// HTTP status code
    pub status: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{}","status":{}}}"#, self, status.as_u16())
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

/// Result type for route handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
