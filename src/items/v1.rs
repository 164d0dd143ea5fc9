//! Version 1: errors reported as a flat `field -> message` map
//!
//! Object-level errors are folded into the same map under `globalError`.

use super::handlers::{
    AppState, add_form, created, edit_form, get_item, list_items, parse_item_id, rejected,
    require_item, updated,
};
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::item::ItemForm;
use crate::core::validation::validate;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
    routing::get,
};

pub const BASE_PATH: &str = "/validation/v1/items";

/// Routes mounted under [`BASE_PATH`]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(BASE_PATH, get(list_items))
        .route(&format!("{BASE_PATH}/add"), get(add_form).post(add_item))
        .route(&format!("{BASE_PATH}/{{item_id}}"), get(get_item))
        .route(
            &format!("{BASE_PATH}/{{item_id}}/edit"),
            get(edit_form).post(edit_item),
        )
}

/// POST /validation/v1/items/add
pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemForm>, JsonRejection>,
) -> ServiceResult<Response> {
    let Json(form) = payload.map_err(|e| ServiceError::invalid_payload(e.body_text()))?;

    let errors = validate(&form).to_error_map();
    if !errors.is_empty() {
        tracing::info!(?errors, "item rejected");
        return Ok(rejected(&form, errors));
    }

    let item = state.repository.save(form).await?;
    tracing::info!(id = item.id, "item added");
    Ok(created(BASE_PATH, item))
}

/// POST /validation/v1/items/{item_id}/edit
pub async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    payload: Result<Json<ItemForm>, JsonRejection>,
) -> ServiceResult<Response> {
    let id = parse_item_id(&item_id)?;
    require_item(&state, id).await?;
    let Json(form) = payload.map_err(|e| ServiceError::invalid_payload(e.body_text()))?;

    let errors = validate(&form).to_error_map();
    if !errors.is_empty() {
        tracing::info!(?errors, id, "item edit rejected");
        return Ok(rejected(&form, errors));
    }

    let item = state.repository.update(id, form).await?;
    Ok(updated(BASE_PATH, item))
}
