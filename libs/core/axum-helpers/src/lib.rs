//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API binaries.
//!
//! - **[`response`]**: the `{code, message, data?}` envelope and [`PageResult`]
//! - **[`errors`]**: [`AppError`] and the [`ErrorCode`] taxonomy
//! - **[`extractors`]**: [`ValidatedJson`] / [`ValidatedQuery`]
//! - **[`http`]**: CORS, trace id and request deadline middleware
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server)
//!     .merge(health_router(core_config::app_info!()));
//! create_production_app(router, &config.server, config.server.shutdown_timeout, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use errors::{AppError, ErrorCode};
pub use extractors::{ValidatedJson, ValidatedQuery};
pub use http::{TRACE_ID_HEADER, TraceId};
pub use response::{ApiResponse, PageResult, StatusBody};
pub use server::{
    API_PREFIX, HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
