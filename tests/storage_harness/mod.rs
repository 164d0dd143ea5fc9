//! Shared test harness for item repository testing
//!
//! Provides form builders and the `item_repository_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

use item_service::core::item::ItemForm;

#[macro_use]
pub mod item_repository_tests;

/// A form that passes every rule
pub fn valid_form(name: &str) -> ItemForm {
    ItemForm::new(name, 10000, 10)
}

/// A form with no values at all
pub fn empty_form() -> ItemForm {
    ItemForm::default()
}

/// `count` valid forms named `item-0`, `item-1`, ...
pub fn numbered_forms(count: usize) -> Vec<ItemForm> {
    (0..count).map(|i| valid_form(&format!("item-{}", i))).collect()
}
