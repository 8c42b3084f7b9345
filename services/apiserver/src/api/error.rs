//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint returns the
//! same `{ code, message, request_id }` shape.
//!
//! # Security considerations
//! - Internal errors log details server-side but return generic messages.
//! - Forbidden responses name the missing permission, never the caller's
//!   roles.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn api_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

pub fn api_not_found(message: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, "not_found", message)
}

pub fn api_conflict(message: &str) -> ApiError {
    api_error(StatusCode::CONFLICT, "conflict", message)
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error and returns a generic message.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "apiserver storage error");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

pub fn api_unauthorized(message: &str) -> ApiError {
    api_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

pub fn api_forbidden(message: &str) -> ApiError {
    api_error(StatusCode::FORBIDDEN, "forbidden", message)
}

pub fn api_validation_error(message: &str) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

/// Translate a store failure: missing rows become 404, conflicts 409, and
/// anything else a logged 500.
pub fn api_store_error(message: &str, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(what) => api_not_found(&format!("{what} not found")),
        StoreError::Conflict(reason) => api_conflict(&reason),
        other => api_internal(message, &other),
    }
}
