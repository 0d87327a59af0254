use axum::Router;
use domain_users::{PgUserRepository, UserService};

pub mod health;

/// API routes without the `/api/v1` prefix; `create_router` nests them.
pub fn routes(state: &crate::state::AppState) -> Router {
    let users = UserService::new(PgUserRepository::new(state.db.clone()));

    Router::new()
        .nest("/auth", domain_users::auth_router())
        .nest("/users", domain_users::router(users))
}

/// `/ready` with a real database ping, mergeable into the stateless app
/// router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
