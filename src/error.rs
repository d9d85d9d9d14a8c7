//! Error types for the customer service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Service Error Enum ==
/// Unified error type for the customer service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input violates a field constraint (code format, empty name)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// No customer exists for the given code
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Attempted creation with a code that already exists
    #[error("Customer code already exists: {0}")]
    Conflict(String),

    /// Underlying persistence failure, propagated unchanged
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ServiceError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the customer service.
pub type Result<T> = std::result::Result<T, ServiceError>;
