use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

use crate::errors::AppError;

/// Bounds the whole request by `deadline`.
///
/// On expiry the handler future is dropped, which cancels whatever store
/// call it was awaiting, and the client gets the 50000 envelope.
///
/// ```ignore
/// router.layer(axum::middleware::from_fn_with_state(Duration::from_secs(30), request_timeout))
/// ```
pub async fn request_timeout(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => AppError::Internal(format!(
            "{} {} exceeded the {:?} request deadline",
            method, path, deadline
        ))
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(deadline: Duration) -> Router {
        Router::new()
            .route("/fast", get(|| async { "done" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(middleware::from_fn_with_state(deadline, request_timeout))
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let response = app(Duration::from_secs(1))
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_request_gets_internal_envelope() {
        let response = app(Duration::from_millis(20))
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 50000);
    }
}
