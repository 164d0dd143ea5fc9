//! Version 3: validation delegated to the registered validator
//!
//! Submissions go through the [`Validated`] extractor, which runs the
//! `Validator<ItemForm>` held in [`AppState`]. Handlers only ever see forms
//! that passed; rejected ones are answered with the full
//! `ValidationResult` before the handler runs.

use super::handlers::{
    AppState, add_form, created, edit_form, get_item, list_items, parse_item_id, require_item,
    updated,
};
use crate::core::error::ServiceResult;
use crate::core::item::ItemForm;
use crate::core::validation::Validated;
use axum::{
    Router,
    extract::{Path, State},
    response::Response,
    routing::get,
};

pub const BASE_PATH: &str = "/validation/v3/items";

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

/// POST /validation/v3/items/add
pub async fn add_item(
    State(state): State<AppState>,
    Validated(form): Validated<ItemForm>,
) -> ServiceResult<Response> {
    let item = state.repository.save(form).await?;
    tracing::info!(id = item.id, "item added");
    Ok(created(BASE_PATH, item))
}

/// POST /validation/v3/items/{item_id}/edit
///
/// The body is validated before the id is looked up, so an invalid
/// submission for an unknown id is answered with 422 rather than 404.
pub async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Validated(form): Validated<ItemForm>,
) -> ServiceResult<Response> {
    let id = parse_item_id(&item_id)?;
    require_item(&state, id).await?;

    let item = state.repository.update(id, form).await?;
    Ok(updated(BASE_PATH, item))
}
