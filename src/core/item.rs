//! The Item record and its submitted form

use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository when an item is first saved
pub type ItemId = u64;

/// A stored item.
///
/// The `id` is assigned by the repository on creation and never changes
/// afterward; the remaining fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    /// Build a stored item from a submitted form
    pub fn from_form(id: ItemId, form: ItemForm) -> Self {
        Self {
            id,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }

    /// Copy the editable fields of `form` onto this item, keeping the id
    pub fn apply(&mut self, form: ItemForm) {
        self.item_name = form.item_name;
        self.price = form.price;
        self.quantity = form.quantity;
    }

    /// The editable part of this item, as it would be submitted
    pub fn to_form(&self) -> ItemForm {
        ItemForm {
            item_name: self.item_name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// The Item-shaped record submitted by a client.
///
/// Every field may be absent; whether that is acceptable is decided by
/// validation, not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl ItemForm {
    /// Convenience constructor with every field present
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}
