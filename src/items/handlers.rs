//! HTTP handlers shared by every validation version
//!
//! Listing, showing and the two form endpoints do not validate anything, so
//! all three route versions mount the same handlers. Only the submissions
//! differ per version.

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::item::{Item, ItemForm, ItemId};
use crate::core::repository::ItemRepository;
use crate::core::validation::{Rejected, Validator};
use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Application state shared by all item handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ItemRepository>,
    pub validator: Arc<dyn Validator<ItemForm>>,
}

impl FromRef<AppState> for Arc<dyn Validator<ItemForm>> {
    fn from_ref(state: &AppState) -> Self {
        state.validator.clone()
    }
}

/// List all items
///
/// GET /validation/{version}/items
pub async fn list_items(State(state): State<AppState>) -> ServiceResult<Json<Value>> {
    let items = state.repository.find_all().await?;

    Ok(Json(json!({
        "items": items,
        "count": items.len()
    })))
}

/// Show one item
///
/// GET /validation/{version}/items/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ServiceResult<Json<Item>> {
    let id = parse_item_id(&item_id)?;
    let item = require_item(&state, id).await?;
    Ok(Json(item))
}

/// Empty form for a new item
///
/// GET /validation/{version}/items/add
pub async fn add_form() -> Json<Value> {
    Json(json!({ "item": ItemForm::default() }))
}

/// Current values of an item, for editing
///
/// GET /validation/{version}/items/{item_id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ServiceResult<Json<Value>> {
    let id = parse_item_id(&item_id)?;
    let item = require_item(&state, id).await?;
    Ok(Json(json!({ "item": item })))
}

pub(crate) fn parse_item_id(raw: &str) -> ServiceResult<ItemId> {
    raw.parse()
        .map_err(|_| ServiceError::invalid_payload(format!("invalid item id: {}", raw)))
}

pub(crate) async fn require_item(state: &AppState, id: ItemId) -> ServiceResult<Item> {
    state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(ServiceError::ItemNotFound { id })
}

/// 422 carrying the submitted form and its errors in the caller's shape
pub(crate) fn rejected(form: &ItemForm, errors: impl Serialize) -> Response {
    Rejected { item: form, errors }.into_response()
}

/// 201 pointing at the new item, flagged as freshly saved
pub(crate) fn created(base_path: &str, item: Item) -> Response {
    let location = format!("{}/{}?status=true", base_path, item.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response()
}

/// 200 pointing back at the edited item
pub(crate) fn updated(base_path: &str, item: Item) -> Response {
    let location = format!("{}/{}", base_path, item.id);
    (StatusCode::OK, [(header::LOCATION, location)], Json(item)).into_response()
}
