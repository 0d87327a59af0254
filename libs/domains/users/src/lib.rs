//! # Users Domain
//!
//! User management behind `/users` plus the development login behind
//! `/auth`.
//!
//! ```text
//! handlers ──► UserService<R> ──► R: UserRepository
//!                                   ├── PgUserRepository (SeaORM / PostgreSQL)
//!                                   └── InMemoryUserRepository
//! ```
//!
//! Users are soft-deleted: `deleted_at` is set and every read path of both
//! repositories skips such rows.

pub mod auth_handlers;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use auth_handlers::{AuthApiDoc, auth_router};
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, router};
pub use models::{
    AuthUser, CreateUserRequest, ListUsersRequest, LoginRequest, LoginResponse,
    UpdateUserRequest, UpdateUserStatusRequest, User, UserStatus,
};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
