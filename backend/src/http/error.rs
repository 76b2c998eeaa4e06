//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::parsing::ParseError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Uploaded payload could not be parsed into records
    InvalidPayload(ParseError),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::InvalidPayload(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PAYLOAD", e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                let (status, code) = match &e {
                    RepositoryError::DatasetNotFound { .. } => {
                        (StatusCode::NOT_FOUND, "NOT_FOUND")
                    }
                    RepositoryError::InvalidDataset { .. } => {
                        (StatusCode::BAD_REQUEST, "BAD_REQUEST")
                    }
                    RepositoryError::RoleMismatch { .. } => {
                        (StatusCode::BAD_REQUEST, "ROLE_MISMATCH")
                    }
                    RepositoryError::Unavailable { .. } => {
                        (StatusCode::SERVICE_UNAVAILABLE, "REPOSITORY_UNAVAILABLE")
                    }
                    RepositoryError::Serialization(_) | RepositoryError::Corrupt { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
                    }
                };
                let mut body = ApiError::new(code, e.to_string());
                if let Some(context) = e.context() {
                    body = body.with_details(context.to_string());
                }
                (status, body)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!("{} {}", error.code, error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::InvalidPayload(err)
    }
}
