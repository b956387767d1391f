//! Request extractors.
//!
//! Each extractor rejects with an [`HttpError`] so that every failure is
//! rendered as the same JSON error body.

use advert_core::{ListQuery, QueryError, RawQuery, parse_list_query};
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Validated query string, available to every advert route.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery(pub ListQuery);

impl<S: Send + Sync> FromRequestParts<S> for ValidQuery {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(
            |rejection| HttpError::BadRequest {
                error: QueryError::TITLE.to_string(),
                detail: Some(rejection.body_text()),
            },
        )?;
        Ok(Self(parse_list_query(&RawQuery::from_pairs(pairs))?))
    }
}

/// The `{id}` path segment, which must be a positive integer.
///
/// Anything else is answered with 404, whatever the method. A leading `+`
/// and leading zeros are accepted, so `/adverts/+1` and `/adverts/01` both
/// address advert 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertId(pub i64);

impl AdvertId {
    fn parse(segment: &str) -> Option<Self> {
        segment.parse::<i64>().ok().filter(|id| *id > 0).map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AdvertId {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::route_not_found())?;
        Self::parse(&segment).ok_or_else(HttpError::route_not_found)
    }
}

/// JSON request body, accepted regardless of `Content-Type`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                HttpError::PayloadTooLarge
            } else {
                HttpError::malformed_body()
            }
        })?;
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|_| HttpError::malformed_body())
    }
}
