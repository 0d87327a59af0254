//! Handler tests for the Users domain
//!
//! Drive the users and auth routers over the in-memory repository and
//! check the `{code, message, data?}` envelope, status codes and the
//! create → read → deactivate → delete lifecycle.

use axum::Router;
use axum::body::Body;
use axum_helpers::{TRACE_ID_HEADER, create_router};
use core_config::server::ServerConfig;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        json_request("POST", "/", json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["data"].clone()
}

#[tokio::test]
async fn test_user_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/",
            json!({"name": "Alice", "email": "alice@example.com", "phone": "555-0100"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "ok");
    assert_eq!(body["data"]["status"], "active");
    assert!(body["data"].get("deleted_at").is_none());
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, empty_request("GET", &format!("/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);

    let (status, updated) = send(
        &app,
        json_request("PUT", &format!("/{id}/status"), json!({"status": "inactive"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"code": 0, "message": "ok"}));

    let (_, fetched) = send(&app, empty_request("GET", &format!("/{id}"))).await;
    assert_eq!(fetched["data"]["status"], "inactive");

    let (status, deleted) = send(&app, empty_request("DELETE", &format!("/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"code": 0, "message": "ok"}));

    let (status, missing) = send(&app, empty_request("GET", &format!("/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({"code": 40400, "message": "resource not found"}));
}

#[tokio::test]
async fn test_create_accepts_null_phone() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/",
            json!({"name": "Bo", "email": "bo@example.com", "phone": null}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["phone"], "");
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let app = app();

    let cases = [
        json!({"name": "", "email": "a@example.com"}),
        json!({"name": "x".repeat(51), "email": "a@example.com"}),
        json!({"name": "Alice", "email": "nope"}),
        json!({"name": "Alice"}),
        json!({"name": "Alice", "email": "a@example.com", "phone": "1".repeat(21)}),
    ];

    for case in cases {
        let (status, body) = send(&app, json_request("POST", "/", case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
        assert_eq!(body, json!({"code": 40001, "message": "invalid parameter"}));
    }
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 40001);
}

#[tokio::test]
async fn test_create_duplicate_email_is_internal_error() {
    let app = app();
    create(&app, "Alice", "dup@example.com").await;

    let (status, body) = send(
        &app,
        json_request("POST", "/", json!({"name": "Other", "email": "dup@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"code": 50000, "message": "internal server error"}));
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let app = app();
    let user = create(&app, "Alice", "alice@example.com").await;
    let id = user["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        json_request("PUT", &format!("/{id}"), json!({"name": "Alicia", "email": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, empty_request("GET", &format!("/{id}"))).await;
    assert_eq!(fetched["data"]["name"], "Alicia");
    assert_eq!(fetched["data"]["email"], "alice@example.com");
    assert_eq!(fetched["data"]["created_at"], user["created_at"]);
}

#[tokio::test]
async fn test_update_rejects_bad_email() {
    let app = app();
    let user = create(&app, "Alice", "alice@example.com").await;
    let id = user["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/{id}"), json!({"email": "broken"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 40001);
}

#[tokio::test]
async fn test_missing_user_is_not_found_everywhere() {
    let app = app();

    let requests = [
        empty_request("GET", "/not-a-uuid"),
        json_request("PUT", "/missing", json!({"name": "X"})),
        json_request("PUT", "/missing/status", json!({"status": "active"})),
        empty_request("DELETE", "/missing"),
    ];

    for request in requests {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 40400);
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_status_update_rejects_unknown_value() {
    let app = app();
    let user = create(&app, "Alice", "alice@example.com").await;
    let id = user["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/{id}/status"), json!({"status": "banned"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 40001);
}

#[tokio::test]
async fn test_list_defaults_filters_and_pages() {
    let app = app();
    create(&app, "Alice", "alice@example.com").await;
    create(&app, "Bob", "bob@example.com").await;
    let carol = create(&app, "Carol", "carol@example.com").await;
    let carol_id = carol["id"].as_str().unwrap();
    send(
        &app,
        json_request("PUT", &format!("/{carol_id}/status"), json!({"status": "inactive"})),
    )
    .await;

    let (status, body) = send(&app, empty_request("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["size"], 10);
    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, empty_request("GET", "/?keyword=ALI")).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["list"][0]["name"], "Alice");

    let (_, body) = send(&app, empty_request("GET", "/?status=inactive")).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["list"][0]["id"], carol_id);

    let (_, body) = send(&app, empty_request("GET", "/?keyword=&status=")).await;
    assert_eq!(body["data"]["total"], 3);

    let (_, body) = send(&app, empty_request("GET", "/?page=2&size=2")).await;
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_paging() {
    let app = app();

    for uri in ["/?page=0", "/?size=0", "/?size=101", "/?page=-1", "/?status=banned"] {
        let (status, body) = send(&app, empty_request("GET", uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(body["code"], 40001);
    }
}

#[tokio::test]
async fn test_login_stub() {
    let app = auth_router();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({"email": "admin@example.com", "password": "anything"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "code": 0,
            "message": "ok",
            "data": {
                "token": "dev-token-admin@example.com",
                "user": {"id": "1", "name": "Administrator", "avatar": "", "permissions": ["*"]}
            }
        })
    );
}

#[tokio::test]
async fn test_login_requires_email_and_password() {
    let app = auth_router();

    for case in [
        json!({"email": "not-an-email", "password": "x"}),
        json!({"email": "admin@example.com", "password": ""}),
        json!({"email": "admin@example.com"}),
    ] {
        let (status, body) = send(&app, json_request("POST", "/login", case)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 40001);
    }
}

fn api_app() -> Router {
    let apis = Router::new()
        .nest("/auth", auth_router())
        .nest(
            "/users",
            handlers::router(UserService::new(InMemoryUserRepository::new())),
        );
    create_router::<ApiDoc>(apis, &ServerConfig::default())
}

#[tokio::test]
async fn test_routes_under_api_prefix_with_middleware() {
    let app = api_app();

    let mut request = json_request(
        "POST",
        "/api/v1/users",
        json!({"name": "Bo", "email": "bo@example.com", "phone": null}),
    );
    request
        .headers_mut()
        .insert(TRACE_ID_HEADER, "trace-abc-123".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[TRACE_ID_HEADER], "trace-abc-123");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["phone"], "");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, empty_request("GET", &format!("/api/v1/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["email"], "bo@example.com");

    let (status, listed) = send(&app, empty_request("GET", "/api/v1/users?keyword=bo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"]["total"], 1);

    let (status, login) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/auth/login",
            json!({"email": "admin@example.com", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["data"]["token"], "dev-token-admin@example.com");

    let preflight = app
        .clone()
        .oneshot(empty_request("OPTIONS", "/api/v1/users"))
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::NO_CONTENT);
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    assert!(preflight.headers().contains_key(TRACE_ID_HEADER));

    let (status, body) = send(&app, empty_request("GET", "/api/v1/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 40400);
}
