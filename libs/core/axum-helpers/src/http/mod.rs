//! Request-level middleware applied around every route.
//!
//! - [`cors`]: wildcard CORS headers and 204 preflight
//! - [`trace_id`]: `X-Trace-ID` propagation and the per-request span
//! - [`timeout`]: per-request deadline rendered as the error envelope

pub mod cors;
pub mod timeout;
pub mod trace_id;

pub use cors::cors;
pub use timeout::request_timeout;
pub use trace_id::{TRACE_ID_HEADER, TraceId, trace_id};
