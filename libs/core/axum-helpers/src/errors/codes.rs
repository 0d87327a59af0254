//! Business error codes returned in the `code` field of the envelope.
//!
//! Each code pairs an HTTP status with a five-digit business code whose
//! first three digits repeat the status.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.code(), 40400);
//! assert_eq!(code.status().as_u16(), 404);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success value of the envelope `code` field.
pub const SUCCESS_CODE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body, query or path failed to decode or validate
    InvalidParam,
    /// Caller is not authenticated
    Unauthorized,
    /// Caller lacks permission
    Forbidden,
    /// Resource does not exist or was deleted
    NotFound,
    /// Anything else; the cause is only logged
    Internal,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::InvalidParam,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::Internal,
    ];

    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidParam => 40001,
            ErrorCode::Unauthorized => 40100,
            ErrorCode::Forbidden => 40300,
            ErrorCode::NotFound => 40400,
            ErrorCode::Internal => 50000,
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidParam => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParam => "INVALID_PARAM",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Client-facing message. Never carries request-specific detail.
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParam => "invalid parameter",
            ErrorCode::Unauthorized => "not logged in",
            ErrorCode::Forbidden => "permission denied",
            ErrorCode::NotFound => "resource not found",
            ErrorCode::Internal => "internal server error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_taxonomy() {
        let table: Vec<(u16, i32)> = ErrorCode::ALL
            .iter()
            .map(|c| (c.status().as_u16(), c.code()))
            .collect();

        assert_eq!(
            table,
            vec![(400, 40001), (401, 40100), (403, 40300), (404, 40400), (500, 50000)]
        );
    }

    #[test]
    fn test_business_code_prefix_is_status() {
        for code in ErrorCode::ALL {
            assert_eq!(code.code() / 100, i32::from(code.status().as_u16()));
        }
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidParam).unwrap();
        assert_eq!(json, "\"INVALID_PARAM\"");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }
}
