//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range client input. Maps to 400.
    #[error("{0}")]
    Validation(String),
    /// Any failure from the catalog store. Maps to 500; no retry, no partial results.
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

/// Wire shape of every error response: `{ "error": true, "message": ..., "details": ... }`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid request parameter"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "catalog query failed"),
        };
        let body = ErrorBody {
            error: true,
            message: self.to_string(),
            details: details.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
