//! Request extractors
//!
//! `AppJson` wraps axum's `Json` so a body that fails to deserialize is
//! answered with the same `{"error": "validation"}` body as any other
//! invalid input, instead of axum's plain-text rejection.

use axum::{
    Json,
    extract::{FromRequest, OptionalFromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON request body whose rejection is an [`AppError::Validation`]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match <Json<T> as FromRequest<S>>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}

// An absent body (no Content-Type) is a valid "no guard" request for
// DELETE; a present but malformed body is still a validation error.
impl<S, T> OptionalFromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if req.headers().get(header::CONTENT_TYPE).is_none() {
            return Ok(None);
        }
        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}
