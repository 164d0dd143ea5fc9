//! Core module containing the item model, validation and repository seam

pub mod error;
pub mod item;
pub mod repository;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use item::{Item, ItemForm, ItemId};
pub use repository::ItemRepository;
pub use validation::{ItemValidator, ValidationResult, Validator, Violation, validate};
