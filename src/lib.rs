//! # Item Service
//!
//! A small CRUD service for items (name, price, quantity) showing three ways
//! of reporting server-side form validation errors over the same rule-set.
//!
//! ## Features
//!
//! - **One rule-set**: [`validate`](core::validation::validate) checks every
//!   field and the price × quantity total, and never short-circuits
//! - **Structured results**: violations carry stable codes, bounds and the
//!   rejected values, so messages need no string building at the call site
//! - **Three reporting shapes**: flat error map (v1), binding-result style
//!   `validator::ValidationErrors` (v2), delegated validator extractor (v3)
//! - **In-memory repository** behind an async trait
//! - **Configuration-Based**: listen address and seed data from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use item_service::prelude::*;
//!
//! let result = validate(&ItemForm::new("pen", 100, 1));
//! assert!(result.has_field_errors("price"));
//! assert_eq!(result.global_errors()[0].code(), "totalPriceMin");
//!
//! let app = ServerBuilder::new()
//!     .with_repository(InMemoryItemRepository::new())
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod items;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ErrorResponse, ServiceError, ServiceResult},
        item::{Item, ItemForm, ItemId},
        repository::ItemRepository,
        validation::{
            FieldError, GlobalError, ItemValidator, Validated, ValidationResult, Validator,
            Violation, validate,
        },
    };

    // === Storage ===
    pub use crate::storage::InMemoryItemRepository;

    // === Config ===
    pub use crate::config::{ServerConfig, ServiceConfig};

    // === Server ===
    pub use crate::items::AppState;
    pub use crate::server::ServerBuilder;
}
