use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query-string counterpart of [`ValidatedJson`](super::ValidatedJson).
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Paging {
        #[validate(range(min = 1, max = 100))]
        size: u32,
    }

    async fn extract(uri: &str) -> Result<ValidatedQuery<Paging>, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidatedQuery::<Paging>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_accepts_in_range() {
        let ValidatedQuery(paging) = extract("/users?size=100").await.unwrap();
        assert_eq!(paging.size, 100);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range() {
        let err = extract("/users?size=101").await.err().unwrap();
        assert_eq!(err.error_code(), ErrorCode::InvalidParam);
    }

    #[tokio::test]
    async fn test_rejects_non_numeric() {
        let err = extract("/users?size=ten").await.err().unwrap();
        assert_eq!(err.error_code(), ErrorCode::InvalidParam);
    }
}
