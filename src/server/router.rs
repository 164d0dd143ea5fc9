//! Router builder utilities for item routes

use crate::items::{AppState, v1, v2, v3};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build item routes for every validation version
///
/// Each version mounts the same six routes under its own prefix:
/// - GET  /validation/{version}/items - List items
/// - GET  /validation/{version}/items/{item_id} - Show an item
/// - GET  /validation/{version}/items/add - Empty form
/// - POST /validation/{version}/items/add - Validate and create
/// - GET  /validation/{version}/items/{item_id}/edit - Item to edit
/// - POST /validation/{version}/items/{item_id}/edit - Validate and update
pub fn build_item_routes(state: AppState) -> Router {
    Router::new()
        .merge(v1::routes())
        .merge(v2::routes())
        .merge(v3::routes())
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "item-service"
    }))
}
