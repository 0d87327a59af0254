use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by the user store and service.
///
/// `Storage` carries the raw store failure; it is logged by the service and
/// never reaches the client.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("user {id}")),
            UserError::Storage(msg) | UserError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::ErrorCode;

    #[test]
    fn test_maps_onto_taxonomy() {
        assert_eq!(
            AppError::from(UserError::NotFound("x".into())).error_code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            AppError::from(UserError::Storage("unique violation".into())).error_code(),
            ErrorCode::Internal
        );
        assert_eq!(
            AppError::from(UserError::Internal("boom".into())).error_code(),
            ErrorCode::Internal
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = UserError::NotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = UserError::from(DbErr::Custom("down".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
