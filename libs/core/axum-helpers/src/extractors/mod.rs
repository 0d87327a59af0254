//! Extractors that decode and validate in one step.
//!
//! Decode failures and `validator` failures both reject with
//! [`AppError::InvalidParam`](crate::errors::AppError::InvalidParam).

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
