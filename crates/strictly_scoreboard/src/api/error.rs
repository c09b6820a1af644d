//! HTTP error responses.

use crate::service::ServiceError;
use crate::store::StoreError;
use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use strictly_tennis::ScoringError;
use tracing::{error, warn};

/// API error, rendered as `{"error": {"code", "message"}}`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// Unknown match.
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Request cannot be applied.
    #[display("Bad request: {}", _0)]
    BadRequest(String),
    /// Point submitted to a finished match.
    #[display("Conflict: {}", _0)]
    Conflict(String),
    /// Player names rejected.
    #[display("Validation failed: {}", _0)]
    Unprocessable(String),
    /// Corrupt stored data or a broken invariant.
    #[display("Internal error: {}", _0)]
    Internal(String),
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetail,
}

/// Machine-readable code plus human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable error code.
    pub code: String,
    /// Description.
    pub message: String,
}

impl ApiError {
    /// Status code and stable error code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "MATCH_FINISHED"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_NAMES"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(e @ StoreError::NotFound(_)) => ApiError::NotFound(e.to_string()),
            ServiceError::Store(e @ StoreError::AlreadyExists(_)) => {
                ApiError::Internal(e.to_string())
            }
            ServiceError::Scoring(e) => match e {
                ScoringError::InvalidPlayerNumber(_) => ApiError::BadRequest(e.to_string()),
                ScoringError::MatchFinished => ApiError::Conflict(e.to_string()),
                ScoringError::UnknownGameState(_)
                | ScoringError::InvalidScoreData(_)
                | ScoringError::InvariantViolation(_) => ApiError::Internal(e.to_string()),
            },
            ServiceError::InvalidNames(e) => ApiError::Unprocessable(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        if status.is_server_error() {
            error!(code, error = %self, "Request failed");
        } else {
            warn!(code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
