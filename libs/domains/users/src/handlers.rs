use axum::{
    Router,
    extract::{Path, State},
    routing::{get, put},
};
use axum_helpers::{
    ApiResponse, PageResult, StatusBody, ValidatedJson, ValidatedQuery,
    errors::responses::{InternalErrorResponse, InvalidParamResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{
    CreateUserRequest, ListUsersRequest, UpdateUserRequest, UpdateUserStatusRequest, User,
    UserStatus,
};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        get_user,
        update_user,
        update_user_status,
        delete_user,
    ),
    components(
        schemas(
            User,
            UserStatus,
            CreateUserRequest,
            UpdateUserRequest,
            UpdateUserStatusRequest,
            StatusBody
        ),
        responses(InvalidParamResponse, NotFoundResponse, InternalErrorResponse)
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/{id}/status", put(update_user_status))
        .with_state(shared_service)
}

/// List users with optional keyword and status filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListUsersRequest),
    responses(
        (status = 200, description = "One page of users, newest first", body = ApiResponse<PageResult<User>>),
        (status = 400, response = InvalidParamResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListUsersRequest>,
) -> UserResult<ApiResponse<PageResult<User>>> {
    let (list, total) = service.list(&query).await?;
    Ok(ApiResponse::ok(PageResult::new(
        list, total, query.page, query.size,
    )))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = ApiResponse<User>),
        (status = 400, response = InvalidParamResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> UserResult<ApiResponse<User>> {
    let user = service.create(input).await?;
    Ok(ApiResponse::ok(user))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<User>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<ApiResponse<User>> {
    let user = service.get_by_id(&id).await?;
    Ok(ApiResponse::ok(user))
}

/// Update name, email or phone. Omitted or empty fields are left unchanged.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = StatusBody),
        (status = 400, response = InvalidParamResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> UserResult<ApiResponse<()>> {
    service.update(&id, input).await?;
    Ok(ApiResponse::empty())
}

/// Activate or deactivate a user
#[utoipa::path(
    put,
    path = "/{id}/status",
    tag = TAG,
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = StatusBody),
        (status = 400, response = InvalidParamResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn update_user_status<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUserStatusRequest>,
) -> UserResult<ApiResponse<()>> {
    service.update_status(&id, input).await?;
    Ok(ApiResponse::empty())
}

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = StatusBody),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<ApiResponse<()>> {
    service.delete(&id).await?;
    Ok(ApiResponse::empty())
}
