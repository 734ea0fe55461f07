//! Typed error handling for the user service
//!
//! The error taxonomy is deliberately small:
//!
//! - [`StoreError`]: returned by store operations; the store never decides
//!   HTTP semantics, it only signals a typed absent/not-found outcome.
//! - [`ValidationError`]: structured rejection of input before any store
//!   access, carrying the offending field name and reason.
//! - [`ApiError`]: the boundary-layer error that owns the status-code
//!   mapping (not found → 404, validation → 422).
//!
//! # Example
//!
//! ```rust,ignore
//! use user_registry::prelude::*;
//!
//! match result {
//!     Ok(user) => println!("Found: {:?}", user),
//!     Err(ApiError::NotFound { id }) => println!("User {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No live user has the requested id
    #[error("no user with id {id}")]
    NotFound { id: u64 },

    /// The store lock was poisoned by a panicking writer
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Structured rejection of input prior to any store access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A recognized field carries an invalid value
    #[error("invalid value for '{field}': {message}")]
    Field { field: String, message: String },

    /// The input carries a field outside the accepted set
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// A required field is absent
    #[error("missing required field '{field}'")]
    MissingField { field: String },
}

impl ValidationError {
    /// The name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Field { field, .. } => field,
            ValidationError::UnknownField { field } => field,
            ValidationError::MissingField { field } => field,
        }
    }
}

/// The boundary-layer error type
///
/// Owns the mapping from core outcomes to HTTP responses. Handlers return
/// `Result<_, ApiError>` and the `IntoResponse` impl below produces the
/// status code and JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested id has no corresponding live user
    #[error("user not found: {id}")]
    NotFound { id: i64 },

    /// A list or search yielded zero results where the contract requires
    /// at least one
    #[error("no users matched the request")]
    NoMatches,

    /// Input was rejected by the validation layer
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal errors that should not happen in normal operation
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id: id as i64 },
            StoreError::Poisoned(msg) => ApiError::Internal(msg),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::NoMatches => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "USER_NOT_FOUND",
            ApiError::NoMatches => "NO_MATCHES",
            ApiError::Validation(ValidationError::UnknownField { .. }) => "UNKNOWN_FIELD",
            ApiError::Validation(ValidationError::MissingField { .. }) => "MISSING_FIELD",
            ApiError::Validation(ValidationError::Field { .. }) => "VALIDATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { id } => Some(serde_json::json!({ "id": id })),
            ApiError::Validation(err) => Some(serde_json::json!({ "field": err.field() })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
