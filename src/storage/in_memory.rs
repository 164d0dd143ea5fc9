//! In-memory implementation of ItemRepository for testing and development

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::item::{Item, ItemForm, ItemId};
use crate::core::repository::ItemRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory item repository
///
/// Uses RwLock for thread-safe access and an atomic sequence for ids, so
/// clones share the same store.
#[derive(Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<ItemId, Item>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryItemRepository {
    /// Create an empty repository; the first saved item gets id 1
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    fn next_id(&self) -> ItemId {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> ServiceResult<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|e| ServiceError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> ServiceResult<Option<Item>> {
        let items = self
            .items
            .read()
            .map_err(|e| ServiceError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items.get(&id).cloned())
    }

    async fn save(&self, form: ItemForm) -> ServiceResult<Item> {
        let mut items = self
            .items
            .write()
            .map_err(|e| ServiceError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let item = Item::from_form(self.next_id(), form);
        items.insert(item.id, item.clone());
        tracing::debug!(id = item.id, "item saved");

        Ok(item)
    }

    async fn update(&self, id: ItemId, form: ItemForm) -> ServiceResult<Item> {
        let mut items = self
            .items
            .write()
            .map_err(|e| ServiceError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let item = items
            .get_mut(&id)
            .ok_or(ServiceError::ItemNotFound { id })?;
        item.apply(form);
        tracing::debug!(id, "item updated");

        Ok(item.clone())
    }

    async fn clear_store(&self) -> ServiceResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| ServiceError::storage(format!("Failed to acquire write lock: {}", e)))?;

        items.clear();

        Ok(())
    }
}
