//! Error types for the analysis service
//!
//! Provides unified error handling using thiserror. Only `ServiceError`
//! is ever visible to API callers; store and cache failures are wrapped
//! or swallowed before they reach the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Store Error Enum ==
/// Failures reported by a document store backend.
///
/// "Document absent" is not an error: store lookups return `Ok(None)`
/// for unknown ids. These variants cover transport and persistence
/// failure only.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not be reached or rejected the operation
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Operation exceeded its deadline
    #[error("storage operation timed out")]
    Timeout,
}

// == Cache Error Enum ==
/// Failures reported by a metric cache backend.
///
/// Never surfaced to callers: the service logs these and falls back to
/// direct computation against the store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend could not be reached or rejected the operation
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),

    /// Operation exceeded its deadline
    #[error("cache operation timed out")]
    Timeout,

    /// Cached bytes did not decode to a metric result
    #[error("cached value could not be decoded: {0}")]
    Decode(String),
}

// == Service Error Enum ==
/// User-visible error type for the analysis service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Document does not exist, or belongs to a different owner.
    ///
    /// The two conditions are deliberately indistinguishable so that
    /// probing for foreign document ids never leaks their existence.
    #[error("Text not found or user not authorized")]
    NotFoundOrUnauthorized,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Document store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::NotFoundOrUnauthorized => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ServiceError::NotFoundOrUnauthorized.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ServiceError::InvalidRequest("empty content".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = ServiceError::Storage(StoreError::Unavailable("connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_hides_backend_detail() {
        // The HTTP message must not echo backend internals
        let err = ServiceError::Storage(StoreError::Timeout);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
