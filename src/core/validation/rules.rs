//! Item validation rules
//!
//! Every rule runs on every pass: a failing field never short-circuits the
//! others, and the cross-field total check sees the raw values even when
//! they already failed their own range checks.

use super::result::ValidationResult;
use super::violation::Violation;
use crate::core::item::ItemForm;

/// Object name used for item message codes ("required.item.itemName")
pub const ITEM_OBJECT_NAME: &str = "item";

pub const FIELD_ITEM_NAME: &str = "itemName";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_QUANTITY: &str = "quantity";

pub const PRICE_MIN: i64 = 1_000;
pub const PRICE_MAX: i64 = 1_000_000;
pub const QUANTITY_MAX: i64 = 9_999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// A validator for values of type `T`.
///
/// Implementations record violations into a caller-owned
/// [`ValidationResult`] and never fail.
pub trait Validator<T>: Send + Sync {
    /// Name of the validated object, used for message codes
    fn object_name(&self) -> &'static str;

    /// Record every violation found in `target` into `errors`
    fn validate(&self, target: &T, errors: &mut ValidationResult);

    /// Validate `target` into a fresh result
    fn check(&self, target: &T) -> ValidationResult {
        let mut errors = ValidationResult::new(self.object_name());
        self.validate(target, &mut errors);
        errors
    }
}

/// Stateless validator holding the fixed item rule-set
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator;

impl Validator<ItemForm> for ItemValidator {
    fn object_name(&self) -> &'static str {
        ITEM_OBJECT_NAME
    }

    fn validate(&self, item: &ItemForm, errors: &mut ValidationResult) {
        let name_present = item
            .item_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !name_present {
            errors.reject_value(
                FIELD_ITEM_NAME,
                Violation::Required,
                item.item_name.clone(),
            );
        }

        let price = item.price.map(i64::from);
        if price.is_none_or(|p| !(PRICE_MIN..=PRICE_MAX).contains(&p)) {
            errors.reject_value(
                FIELD_PRICE,
                Violation::Range {
                    min: PRICE_MIN,
                    max: PRICE_MAX,
                },
                item.price,
            );
        }

        let quantity = item.quantity.map(i64::from);
        if quantity.is_none_or(|q| q > QUANTITY_MAX) {
            errors.reject_value(
                FIELD_QUANTITY,
                Violation::Max { max: QUANTITY_MAX },
                item.quantity,
            );
        }

        // Skipped on partial data; the absent field already carries its own error.
        if let (Some(price), Some(quantity)) = (price, quantity) {
            let total = price * quantity;
            if total < TOTAL_PRICE_MIN {
                errors.reject(Violation::TotalPriceMin {
                    min: TOTAL_PRICE_MIN,
                    actual: total,
                });
            }
        }
    }
}

/// Validate an item against the fixed rule-set
pub fn validate(item: &ItemForm) -> ValidationResult {
    ItemValidator.check(item)
}
