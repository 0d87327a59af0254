//! PostgreSQL connectivity for the user service.
//!
//! - [`postgres`]: pool configuration, connect (with retry), migrations, health ping
//! - [`common`]: error type and the backoff helper used at startup
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "admin_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::DatabaseError;
