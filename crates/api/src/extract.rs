//! Extractors that report rejections through [`AppError`].
//!
//! Axum's built-in `Json` and `Path` rejections answer with plain-text
//! bodies; these wrappers keep every failure in the JSON error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use trivia_core::error::CoreError;

use crate::error::AppError;

/// JSON request body.
///
/// Well-formed JSON of the wrong shape is a 422. Every other rejection keeps
/// axum's status: malformed JSON is a 400, an oversized body a 413 and a
/// missing `Content-Type` a 415.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                Err(AppError::Core(CoreError::Unprocessable(e.body_text())))
            }
            Err(other) => Err(AppError::Rejected {
                status: other.status(),
                detail: other.body_text(),
            }),
        }
    }
}

/// Typed path parameters.
///
/// A parameter that does not parse (e.g. `/questions/abc`) means no such
/// resource, so the rejection is a 404.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|rejection| AppError::RouteNotFound(rejection.body_text()))
    }
}
