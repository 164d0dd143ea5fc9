//! The closed set of rule violations an item can produce

use serde::Serialize;
use std::fmt;

/// A single rule violation, tagged with a stable code.
///
/// Each variant carries the values a renderer needs (bounds, observed
/// totals) so a message can be produced without string concatenation at
/// the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "camelCase")]
pub enum Violation {
    /// Value must be present and contain non-whitespace text
    Required,

    /// Value must be present and lie within `min..=max`
    Range { min: i64, max: i64 },

    /// Value must be present and not exceed `max`
    Max { max: i64 },

    /// Object-level: `price * quantity` must reach `min`
    TotalPriceMin { min: i64, actual: i64 },
}

impl Violation {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::Range { .. } => "range",
            Violation::Max { .. } => "max",
            Violation::TotalPriceMin { .. } => "totalPriceMin",
        }
    }

    /// Positional message arguments, in the order the message template uses them
    pub fn args(&self) -> Vec<i64> {
        match *self {
            Violation::Required => vec![],
            Violation::Range { min, max } => vec![min, max],
            Violation::Max { max } => vec![max],
            Violation::TotalPriceMin { min, actual } => vec![min, actual],
        }
    }

    /// Named arguments, as exposed in parameter maps
    pub fn params(&self) -> Vec<(&'static str, i64)> {
        match *self {
            Violation::Required => vec![],
            Violation::Range { min, max } => vec![("min", min), ("max", max)],
            Violation::Max { max } => vec![("max", max)],
            Violation::TotalPriceMin { min, actual } => vec![("min", min), ("actual", actual)],
        }
    }

    /// Render the default message for a violation on `field`.
    ///
    /// Object-level violations ignore the field name.
    pub fn message_for(&self, field: &str) -> String {
        let subject = field_label(field);
        match self {
            Violation::Required => format!("{subject} must not be blank"),
            Violation::Range { min, max } => {
                format!("{subject} must be between {min} and {max}")
            }
            Violation::Max { max } => format!("{subject} must not exceed {max}"),
            Violation::TotalPriceMin { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "value must not be blank"),
            Violation::Range { min, max } => write!(f, "value must be between {} and {}", min, max),
            Violation::Max { max } => write!(f, "value must not exceed {}", max),
            Violation::TotalPriceMin { min, actual } => write!(
                f,
                "price * quantity must be at least {} (current value {})",
                min, actual
            ),
        }
    }
}

/// Human label for a camelCase field name ("itemName" -> "item name")
fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 2);
    for ch in field.chars() {
        if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}
