use axum::response::Response;

use super::{ErrorCode, error_response};

/// Router fallback: unknown routes get the 40400 envelope.
pub async fn not_found() -> Response {
    error_response(ErrorCode::NotFound)
}
