//! JSON extractor whose rejections use the application error format.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a malformed or mistyped body is answered with
/// `{"error": "<reason>"}` instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) -> ... { }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
