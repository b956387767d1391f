//! Advert handlers - CRUD operations over `/adverts`.

use advert_core::{AdvertInput, CoreError};
use axum::extract::State;

use crate::dto::{AdvertItemDto, AdvertSummaryDto, CreatedDto};
use crate::error::HttpError;
use crate::extract::{AdvertId, JsonBody, ValidQuery};
use crate::response::ApiResponse;
use crate::state::AppState;

/// List adverts, sorted and paged by the query string.
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery,
) -> Result<ApiResponse<AdvertSummaryDto>, HttpError> {
    match state.adverts.get_all(&query).await {
        Ok(page) => Ok(ApiResponse::page(
            page.items.into_iter().map(Into::into).collect(),
            page.max_page,
        )),
        Err(CoreError::NoItems) => {
            tracing::info!("advert list requested on an empty store");
            Ok(ApiResponse::Multi {
                status: axum::http::StatusCode::OK,
                data: Vec::new(),
                meta: None,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Create an advert. Responds with the new ID only.
pub async fn create(
    State(state): State<AppState>,
    ValidQuery(_): ValidQuery,
    JsonBody(input): JsonBody<AdvertInput>,
) -> Result<ApiResponse<CreatedDto>, HttpError> {
    let id = state.adverts.create(input).await?;
    Ok(ApiResponse::created(vec![CreatedDto { id }]))
}

/// Get one advert, reduced unless `fields=true`.
pub async fn get(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery,
    AdvertId(id): AdvertId,
) -> Result<ApiResponse<AdvertItemDto>, HttpError> {
    let advert = state.adverts.get_by_id(id).await?;
    Ok(ApiResponse::ok(AdvertItemDto::project(advert, query.fields)))
}

/// Partially update an advert.
pub async fn update(
    State(state): State<AppState>,
    ValidQuery(_): ValidQuery,
    AdvertId(id): AdvertId,
    JsonBody(patch): JsonBody<AdvertInput>,
) -> Result<ApiResponse<()>, HttpError> {
    state.adverts.update(id, patch).await?;
    Ok(ApiResponse::empty())
}

/// Delete an advert and its photos.
pub async fn remove(
    State(state): State<AppState>,
    ValidQuery(_): ValidQuery,
    AdvertId(id): AdvertId,
) -> Result<ApiResponse<()>, HttpError> {
    state.adverts.delete(id).await?;
    Ok(ApiResponse::empty())
}

/// Any other method on `/adverts`.
pub async fn collection_method_not_allowed(ValidQuery(_): ValidQuery) -> HttpError {
    HttpError::MethodNotAllowed
}

/// Any other method on `/adverts/{id}`. A bad ID still answers 404.
pub async fn item_method_not_allowed(
    ValidQuery(_): ValidQuery,
    AdvertId(_): AdvertId,
) -> HttpError {
    HttpError::MethodNotAllowed
}
