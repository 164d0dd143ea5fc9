//! Typed error handling for the item service
//!
//! Validation violations are never errors: they are accumulated in a
//! [`ValidationResult`](crate::core::validation::ValidationResult) and
//! reported by the caller. [`ServiceError`] covers everything else that can
//! stop a request (unknown ids, unreadable payloads, storage and
//! configuration failures) and maps each case to an HTTP status and a stable
//! error code.
//!
//! # Example
//!
//! ```rust,ignore
//! match repository.update(id, form).await {
//!     Ok(item) => println!("updated {}", item.id),
//!     Err(ServiceError::ItemNotFound { id }) => println!("no item {}", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::item::ItemId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Result alias used by the repository and handlers
pub type ServiceResult<T> = Result<T, ServiceError>;

/// The main error type for the item service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No item is stored under this id
    #[error("item with id '{id}' not found")]
    ItemNotFound { id: ItemId },

    /// The request body could not be read as an item
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },

    /// The storage backend failed
    #[error("storage error: {message}")]
    Storage { message: String },

    /// Configuration could not be loaded or is inconsistent
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    pub fn storage(message: impl Into<String>) -> Self {
        ServiceError::Storage {
            message: message.into(),
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        ServiceError::InvalidPayload {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ItemNotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            ServiceError::InvalidPayload { .. } => "INVALID_PAYLOAD",
            ServiceError::Storage { .. } => "STORAGE_ERROR",
            ServiceError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::ItemNotFound { id } => Some(serde_json::json!({ "id": id })),
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_yaml::Error> for ServiceError {
    fn from(err: serde_yaml::Error) -> Self {
        ServiceError::Config {
            message: err.to_string(),
        }
    }
}
