// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// The `{id}` path segment of an article route. Anything that is not a
/// positive integer is treated as a missing record.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdParam(pub i64);

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::from_error(ApplicationError::not_found("article not found")))?;

        raw.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(|| HttpError::from_error(ApplicationError::not_found("article not found")))
    }
}
