//! Macro-generated test suite for the `ItemRepository` contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use item_service::storage::InMemoryItemRepository;
//!
//! item_repository_tests!(InMemoryItemRepository::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_save_and_find` - save then retrieve, ids start at 1
//! - `test_find_nonexistent` - unknown id returns None
//! - `test_find_all_empty` - empty store lists nothing
//! - `test_find_all_in_id_order` - listing follows id order
//! - `test_save_keeps_absent_values` - unset fields stay unset
//! - `test_update_existing` - fields replaced, id kept
//! - `test_update_nonexistent` - unknown id is `ItemNotFound`
//! - `test_clear_store` - store emptied
//! - `test_concurrent_saves` - parallel saves get distinct ids

/// Generate a full `ItemRepository` conformance test suite.
///
/// `$factory` is re-evaluated for each test. For the concurrent test the
/// repository must also be `Clone + 'static` with shared state.
#[macro_export]
macro_rules! item_repository_tests {
    ($factory:expr) => {
        mod item_repository_contract_tests {
            use super::*;
            use item_service::core::error::ServiceError;
            use item_service::core::repository::ItemRepository;
            use std::collections::BTreeSet;

            #[tokio::test]
            async fn test_save_and_find() {
                let repository = $factory;

                let saved = repository.save(valid_form("itemA")).await.unwrap();
                assert_eq!(saved.id, 1);
                assert_eq!(saved.item_name.as_deref(), Some("itemA"));

                let found = repository.find_by_id(saved.id).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let repository = $factory;
                assert!(repository.find_by_id(404).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let repository = $factory;
                assert!(repository.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_find_all_in_id_order() {
                let repository = $factory;
                for form in numbered_forms(5) {
                    repository.save(form).await.unwrap();
                }

                let ids: Vec<u64> = repository
                    .find_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|item| item.id)
                    .collect();
                assert_eq!(ids, vec![1, 2, 3, 4, 5]);
            }

            #[tokio::test]
            async fn test_save_keeps_absent_values() {
                let repository = $factory;

                let saved = repository.save(empty_form()).await.unwrap();
                assert!(saved.item_name.is_none());
                assert!(saved.price.is_none());
                assert!(saved.quantity.is_none());
            }

            #[tokio::test]
            async fn test_update_existing() {
                let repository = $factory;
                let saved = repository.save(valid_form("itemA")).await.unwrap();

                let mut form = valid_form("itemA2");
                form.quantity = Some(3);
                let updated = repository.update(saved.id, form).await.unwrap();
                assert_eq!(updated.id, saved.id);
                assert_eq!(updated.item_name.as_deref(), Some("itemA2"));
                assert_eq!(updated.quantity, Some(3));

                let found = repository.find_by_id(saved.id).await.unwrap().unwrap();
                assert_eq!(found, updated);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let repository = $factory;

                let result = repository.update(9, valid_form("ghost")).await;
                assert!(matches!(result, Err(ServiceError::ItemNotFound { id: 9 })));
                assert!(repository.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_clear_store() {
                let repository = $factory;
                for form in numbered_forms(3) {
                    repository.save(form).await.unwrap();
                }

                repository.clear_store().await.unwrap();
                assert!(repository.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let repository = $factory;

                let handles: Vec<_> = numbered_forms(20)
                    .into_iter()
                    .map(|form| {
                        let repository = repository.clone();
                        tokio::spawn(async move { repository.save(form).await.unwrap().id })
                    })
                    .collect();

                let mut ids = BTreeSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap());
                }

                assert_eq!(ids.len(), 20);
                assert_eq!(repository.find_all().await.unwrap().len(), 20);
            }
        }
    };
}
