//! Request extractors

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// JSON body extractor whose rejections render as `AppError::Validation`
///
/// Malformed bodies, missing fields and a missing content type all come
/// back as 400 with the usual `{"message": ...}` body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
