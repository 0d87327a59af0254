//! Development login.
//!
//! This is a placeholder, not a security boundary: any syntactically valid
//! email with a non-empty password is accepted and granted every permission.
//! No other route checks the returned token.

use axum::{Router, routing::post};
use axum_helpers::{
    ApiResponse, ValidatedJson,
    errors::responses::{InternalErrorResponse, InvalidParamResponse},
};
use utoipa::OpenApi;

use crate::models::{AuthUser, LoginRequest, LoginResponse};

pub const AUTH_TAG: &str = "auth";
pub const DEV_TOKEN_PREFIX: &str = "dev-token-";

#[derive(OpenApi)]
#[openapi(
    paths(login),
    components(
        schemas(LoginRequest, LoginResponse, AuthUser),
        responses(InvalidParamResponse, InternalErrorResponse)
    ),
    tags((name = AUTH_TAG, description = "Development login"))
)]
pub struct AuthApiDoc;

pub fn auth_router() -> Router {
    Router::new().route("/login", post(login))
}

/// Issue a development token for any valid email/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = ApiResponse<LoginResponse>),
        (status = 400, response = InvalidParamResponse)
    )
)]
async fn login(ValidatedJson(input): ValidatedJson<LoginRequest>) -> ApiResponse<LoginResponse> {
    tracing::info!(email = %input.email, "dev login");
    ApiResponse::ok(dev_login(&input.email))
}

fn dev_login(email: &str) -> LoginResponse {
    LoginResponse {
        token: format!("{DEV_TOKEN_PREFIX}{email}"),
        user: AuthUser {
            id: "1".to_string(),
            name: "Administrator".to_string(),
            avatar: String::new(),
            permissions: vec!["*".to_string()],
        },
    }
}
