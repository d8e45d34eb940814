//! Request extractors whose rejections are [`ApiError`]s, so a malformed
//! body, path or query gets the same `{"code", "message"}` body as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// A JSON request body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// The numeric `{id}` path segment.
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Id(id))
    }
}

/// `?id=` on report endpoints. Absent means every row, same as `id=0`.
pub struct ReportFilter(pub i64);

#[derive(Debug, Default, Deserialize)]
struct ReportQuery {
    id: Option<i64>,
}

impl<S> FromRequestParts<S> for ReportFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ReportQuery>::from_request_parts(parts, state).await?;
        Ok(ReportFilter(query.id.unwrap_or(0)))
    }
}
