//! Handlers for the `/items` resource.
//!
//! Each handler validates its input first and only then makes exactly one
//! repository call. Ids arrive as raw path strings so malformed values get
//! the domain's "Invalid id parameter" message rather than an extractor
//! rejection. Bodies arrive as raw bytes for the same reason.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use diary_core::error::CoreError;
use diary_core::item::{parse_item_id, ItemFields};
use diary_db::models::item::Item;
use diary_db::repositories::ItemRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Validate a create/update body, turning unreadable JSON into a 400.
///
/// The body is parsed whatever its `Content-Type` says.
fn item_fields(body: &Bytes) -> AppResult<ItemFields> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;
    Ok(ItemFields::from_json(&value)?)
}

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool)
        .await
        .map_err(AppError::store("Error fetching items"))?;
    Ok(Json(items))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Item>)> {
    let input = item_fields(&body)?;
    let item = ItemRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store("Error creating item"))?;
    tracing::info!(item_id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&raw_id)?;
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store("Error fetching item"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
///
/// An unknown id surfaces as a store failure (500), not a 404.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&raw_id)?;
    let input = item_fields(&body)?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::store("Error updating item"))?;
    tracing::info!(item_id = id, "Item updated");
    Ok(Json(item))
}

/// DELETE /api/items/{id}
///
/// An unknown id surfaces as a store failure (500), not a 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_item_id(&raw_id)?;
    ItemRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::store("Error deleting item"))?;
    tracing::info!(item_id = id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
