//! Item handlers.
//!
//! Each handler is a thin translation: extract route and body, call the
//! repository, map the entity to an `ItemDto`, pick a status. The handlers
//! hold no state beyond the shared repository handle.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use items_core::{CreateItemDto, Item, ItemDto, UpdateItemDto};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::SharedRepository;

/// A freshly created item plus the path it can be fetched from.
#[derive(Debug)]
pub struct Created {
    pub location: String,
    pub item: ItemDto,
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.item),
        )
            .into_response()
    }
}

pub fn item_location(id: Uuid) -> String {
    format!("/items/{id}")
}

pub async fn get_items(State(repo): State<SharedRepository>) -> ApiResult<Json<Vec<ItemDto>>> {
    let items: Vec<ItemDto> = repo.get_items().await?.into_iter().map(ItemDto::from).collect();
    tracing::info!(count = items.len(), "retrieved items");
    Ok(Json(items))
}

pub async fn get_item(
    State(repo): State<SharedRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ItemDto>> {
    let item = repo.get_item(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(item.as_dto()))
}

pub async fn create_item(
    State(repo): State<SharedRepository>,
    Json(input): Json<CreateItemDto>,
) -> ApiResult<Created> {
    input.validate()?;
    let item = Item::from(input);
    let dto = item.as_dto();
    repo.create_item(item).await?;
    tracing::info!(id = %dto.id, "created item");
    Ok(Created {
        location: item_location(dto.id),
        item: dto,
    })
}

pub async fn update_item(
    State(repo): State<SharedRepository>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItemDto>,
) -> ApiResult<StatusCode> {
    input.validate()?;
    let existing = repo.get_item(id).await?.ok_or(ApiError::NotFound)?;
    repo.update_item(existing.merged(input)).await?;
    tracing::info!(%id, "updated item");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(repo): State<SharedRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if repo.get_item(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    repo.delete_item(id).await?;
    tracing::info!(%id, "deleted item");
    Ok(StatusCode::NO_CONTENT)
}
