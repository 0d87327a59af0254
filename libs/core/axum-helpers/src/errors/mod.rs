pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::response::StatusBody;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Application error rendered as the `{code, message}` envelope.
///
/// The payload of each variant is diagnostic detail. It is logged when the
/// error is rendered and never sent to the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::InvalidParam(_) => ErrorCode::InvalidParam,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidParam(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidParam(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidParam(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidParam(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        match &self {
            AppError::Internal(detail) => {
                tracing::error!(error_code = code.code(), error = %detail, "Request failed");
            }
            AppError::InvalidParam(detail) => {
                tracing::info!(error_code = code.code(), error = %detail, "Rejected request parameters");
            }
            AppError::NotFound(detail) => {
                tracing::info!(error_code = code.code(), error = %detail, "Resource not found");
            }
            AppError::Unauthorized | AppError::Forbidden => {
                tracing::info!(error_code = code.code(), "Access denied");
            }
        }

        error_response(code)
    }
}

/// Renders the bare envelope for `code` with its HTTP status.
pub fn error_response(code: ErrorCode) -> Response {
    (code.status(), Json(StatusBody::from(code))).into_response()
}
