//! Repository trait for item persistence

use crate::core::error::ServiceResult;
use crate::core::item::{Item, ItemForm, ItemId};
use async_trait::async_trait;

/// Persistence operations for items
///
/// The service is agnostic to the storage mechanism; handlers only ever
/// talk to an `Arc<dyn ItemRepository>`.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every stored item, in id order
    async fn find_all(&self) -> ServiceResult<Vec<Item>>;

    /// Get an item by id
    async fn find_by_id(&self, id: ItemId) -> ServiceResult<Option<Item>>;

    /// Store a new item and assign it the next id
    async fn save(&self, form: ItemForm) -> ServiceResult<Item>;

    /// Replace the name, price and quantity of an existing item
    ///
    /// Fails with `ItemNotFound` when no item has this id.
    async fn update(&self, id: ItemId, form: ItemForm) -> ServiceResult<Item>;

    /// Remove every item
    async fn clear_store(&self) -> ServiceResult<()>;
}
