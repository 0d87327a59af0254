//! Request-scoped trace identifier.
//!
//! The id comes from the `X-Trace-ID` request header, or a fresh UUID v4
//! when the header is absent or unusable. It is:
//!
//! - recorded on the `request` span that wraps the rest of the pipeline, so
//!   every event logged while serving the request carries `trace_id`
//! - stored in request extensions and in task-local scope ([`TraceId::current`])
//! - echoed back in the `X-Trace-ID` response header
//!
//! Task-locals do not cross `tokio::spawn`; wrap spawned work in
//! [`TraceId::scope`] to keep the id.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::task_local;
use tracing::Instrument;
use uuid::Uuid;

pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

const MAX_TRACE_ID_LEN: usize = 128;

task_local! {
    static TRACE_ID: TraceId;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(Arc<str>);

impl TraceId {
    pub fn generate() -> Self {
        Self(Arc::from(Uuid::new_v4().to_string()))
    }

    /// Caller-supplied id, if present, printable and reasonably short.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(&TRACE_ID_HEADER)?.to_str().ok()?.trim();
        if raw.is_empty() || raw.len() > MAX_TRACE_ID_LEN {
            return None;
        }
        Some(Self(Arc::from(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id of the request currently being served, if any.
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(Clone::clone).ok()
    }

    pub async fn scope<Fut: Future>(trace_id: TraceId, fut: Fut) -> Fut::Output {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Middleware attaching a [`TraceId`] and request span to every request.
pub async fn trace_id(mut request: Request, next: Next) -> Response {
    let trace_id = TraceId::from_headers(request.headers()).unwrap_or_else(TraceId::generate);

    let span = tracing::info_span!(
        "request",
        trace_id = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(trace_id.clone());

    let mut response = TraceId::scope(trace_id.clone(), next.run(request))
        .instrument(span)
        .await;

    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}
