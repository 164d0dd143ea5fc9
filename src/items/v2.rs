//! Version 2: errors reported as a structured binding result
//!
//! Every error keeps its code, message and parameters (bounds, rejected
//! value, message codes) in a `validator::ValidationErrors` document.
//! Object-level errors are listed under `__all__`.

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

pub const BASE_PATH: &str = "/validation/v2/items";

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

/// POST /validation/v2/items/add
pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemForm>, JsonRejection>,
) -> ServiceResult<Response> {
    let Json(form) = payload.map_err(|e| ServiceError::invalid_payload(e.body_text()))?;
    tracing::info!(item = ?form, "item submitted");

    let binding_result = validate(&form);
    if binding_result.has_errors() {
        tracing::info!(?binding_result, "item rejected");
        return Ok(rejected(&form, binding_result.to_validation_errors()));
    }

    let item = state.repository.save(form).await?;
    tracing::info!(id = item.id, "item added");
    Ok(created(BASE_PATH, item))
}

/// POST /validation/v2/items/{item_id}/edit
pub async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    payload: Result<Json<ItemForm>, JsonRejection>,
) -> ServiceResult<Response> {
    let id = parse_item_id(&item_id)?;
    require_item(&state, id).await?;
    let Json(form) = payload.map_err(|e| ServiceError::invalid_payload(e.body_text()))?;

    let binding_result = validate(&form);
    if binding_result.has_errors() {
        tracing::info!(?binding_result, id, "item edit rejected");
        return Ok(rejected(&form, binding_result.to_validation_errors()));
    }

    let item = state.repository.update(id, form).await?;
    Ok(updated(BASE_PATH, item))
}
