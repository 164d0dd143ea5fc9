//! Integration tests for InMemoryItemRepository using the storage test harness.
//!
//! This file invokes `item_repository_tests!` to validate that
//! InMemoryItemRepository fully conforms to the ItemRepository contract.

#[macro_use]
mod storage_harness;

use item_service::storage::InMemoryItemRepository;
use storage_harness::*;

item_repository_tests!(InMemoryItemRepository::new());
