//! The uniform response envelope.
//!
//! Every endpoint answers with `{code, message, data?}`: `code == 0` and
//! `message == "ok"` on success, the taxonomy code otherwise. `data` is
//! omitted for operations that return nothing and for all errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ErrorCode;
use crate::errors::codes::SUCCESS_CODE;

pub const OK_MESSAGE: &str = "ok";

/// Success envelope carrying `data`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload.
    pub fn empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            message: OK_MESSAGE.to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Envelope without `data`: every error and every void success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "ok")]
    pub message: String,
}

impl From<ErrorCode> for StatusBody {
    fn from(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            message: code.default_message().to_string(),
        }
    }
}

/// One page of a filtered listing plus the total match count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> PageResult<T> {
    pub fn new(list: Vec<T>, total: u64, page: u32, size: u32) -> Self {
        Self {
            list,
            total,
            page,
            size,
        }
    }
}
