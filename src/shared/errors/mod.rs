//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("first name is required")]
    FirstNameRequired,

    #[error("last name is required")]
    LastNameRequired,
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("user {first_name} {last_name} is already stored")]
    Duplicate { first_name: String, last_name: String },

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("user already exists")]
    Conflict(#[source] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate { .. } => Self::Conflict(err),
            RepositoryError::Storage(_) => Self::Repository(err),
        }
    }
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    ///
    /// Every client-caused failure maps to 400, conflicts included.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::Domain(_) => "VALIDATION_ERROR",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("malformed request body: {0}")]
    MalformedInput(String),

    #[error("no route for {method} {path}")]
    NotFound { method: String, path: String },

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(uc_error) => uc_error.status_code(),
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match &self {
            ApiError::UseCase(uc_error) if status.is_server_error() => {
                tracing::error!(error = %uc_error, "Use case failed unexpectedly");
                (
                    uc_error.error_code().to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiError::UseCase(uc_error) => (uc_error.error_code().to_string(), uc_error.to_string()),
            ApiError::MalformedInput(msg) => ("MALFORMED_INPUT".to_string(), msg.clone()),
            ApiError::NotFound { .. } => ("NOT_FOUND".to_string(), self.to_string()),
            ApiError::Serialization(err) => {
                tracing::error!(error = %err, "Failed to serialize response");
                (
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "Rejected malformed request body");
        ApiError::MalformedInput(rejection.body_text())
    }
}
