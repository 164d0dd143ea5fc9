//! Axum extractor for validated payloads
//!
//! This module provides the `Validated<T>` extractor that parses a JSON body
//! and runs it through the `Validator<T>` held in the router state before
//! the handler sees it.

use super::rules::Validator;
use crate::core::error::ServiceError;
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// Axum extractor that validates the request body
///
/// The validator is not registered globally: it is whatever
/// `Arc<dyn Validator<T>>` the router state hands out through [`FromRef`].
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn add_item(
///     State(state): State<AppState>,
///     Validated(form): Validated<ItemForm>,
/// ) -> Result<Response, ServiceError> {
///     // form already passed every rule
/// }
/// ```
///
/// # Rejections
///
/// - `400 Bad Request` with an error document when the body is not valid
///   JSON for `T`
/// - `422 Unprocessable Entity` with `{"item": <submitted>, "errors": <ValidationResult>}`
///   when validation finds any violation
pub struct Validated<T>(pub T);

/// Body of a `422` answer: the submitted payload and its errors
///
/// Serialized field by field, so the errors keep the order their own
/// `Serialize` impl gives them.
#[derive(Debug, Serialize)]
pub struct Rejected<'a, T, E> {
    pub item: &'a T,
    pub errors: E,
}

impl<T: Serialize, E: Serialize> IntoResponse for Rejected<'_, T, E> {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Serialize + Send + 'static,
    Arc<dyn Validator<T>>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ServiceError::invalid_payload(e.body_text()).into_response())?;

        let validator = Arc::<dyn Validator<T>>::from_ref(state);
        let errors = validator.check(&payload);

        if errors.has_errors() {
            tracing::info!(errors = ?errors, "validation failed");
            return Err(Rejected {
                item: &payload,
                errors: &errors,
            }
            .into_response());
        }

        Ok(Validated(payload))
    }
}
