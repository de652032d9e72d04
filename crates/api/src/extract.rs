//! Request extractors that reject with [`AppError`] so every failure,
//! including malformed input, renders the standard JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use holocron_core::validation::Validate;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::query::PaginationParams;

/// JSON body that has been deserialized and passed [`Validate`].
///
/// Malformed JSON or mistyped fields are rejected with a 400 before
/// validation runs; rule violations are rejected with a 400 listing every
/// message.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Integer `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::BadRequest("Validation failed (numeric string is expected)".into())
            })?;
        Ok(Self(id))
    }
}

/// Validated `?skip=&take=` window.
#[derive(Debug, Clone, Copy)]
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let page = Pagination::parse(params.skip.as_deref(), params.take.as_deref())?;
        Ok(Self(page))
    }
}
