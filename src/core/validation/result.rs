//! Accumulated outcome of one validation pass
//!
//! A [`ValidationResult`] plays the role of a binding result: validators
//! record violations into it with [`reject_value`](ValidationResult::reject_value)
//! and [`reject`](ValidationResult::reject), and callers adapt it into the
//! reporting shape their boundary uses.

use super::violation::Violation;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Key under which object-level errors are reported in flat maps
pub const GLOBAL_ERROR_KEY: &str = "globalError";

/// Key under which object-level errors are reported in `validator::ValidationErrors`
pub const SCHEMA_ERROR_KEY: &str = "__all__";

/// A violation attributable to one named field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(skip)]
    pub field: &'static str,
    #[serde(flatten)]
    pub violation: Violation,
    pub message: String,
    pub rejected_value: Value,
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        self.violation.code()
    }

    /// Message codes from most to least specific: `code.object.field`, `code.field`, `code`
    pub fn message_codes(&self, object_name: &str) -> Vec<String> {
        let code = self.code();
        vec![
            format!("{}.{}.{}", code, object_name, self.field),
            format!("{}.{}", code, self.field),
            code.to_string(),
        ]
    }
}

/// A violation spanning several fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalError {
    #[serde(flatten)]
    pub violation: Violation,
    pub message: String,
}

impl GlobalError {
    pub fn code(&self) -> &'static str {
        self.violation.code()
    }

    /// Message codes from most to least specific: `code.object`, `code`
    pub fn message_codes(&self, object_name: &str) -> Vec<String> {
        let code = self.code();
        vec![format!("{}.{}", code, object_name), code.to_string()]
    }
}

/// Field and object errors collected for one validated object.
///
/// An empty result (no field errors, no global errors) means the object is
/// valid; nothing else is consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    #[serde(skip)]
    object_name: &'static str,
    field_errors: IndexMap<&'static str, Vec<FieldError>>,
    global_errors: Vec<GlobalError>,
}

impl ValidationResult {
    /// Create an empty result for the object named `object_name` (e.g. "item")
    pub fn new(object_name: &'static str) -> Self {
        Self {
            object_name,
            field_errors: IndexMap::new(),
            global_errors: Vec::new(),
        }
    }

    pub fn object_name(&self) -> &'static str {
        self.object_name
    }

    /// Record a field error together with the value that was rejected
    pub fn reject_value(
        &mut self,
        field: &'static str,
        violation: Violation,
        rejected_value: impl Into<Value>,
    ) {
        let error = FieldError {
            field,
            violation,
            message: violation.message_for(field),
            rejected_value: rejected_value.into(),
        };
        self.field_errors.entry(field).or_default().push(error);
    }

    /// Record an object-level error
    pub fn reject(&mut self, violation: Violation) {
        self.global_errors.push(GlobalError {
            violation,
            message: violation.to_string(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.global_errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// Total number of field and object errors
    pub fn error_count(&self) -> usize {
        self.field_errors.values().map(Vec::len).sum::<usize>() + self.global_errors.len()
    }

    /// Errors recorded for `field`, in the order they were rejected
    pub fn field_errors(&self, field: &str) -> &[FieldError] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        !self.field_errors(field).is_empty()
    }

    /// Fields with at least one error, in the order they were first rejected
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.field_errors.keys().copied()
    }

    pub fn global_errors(&self) -> &[GlobalError] {
        &self.global_errors
    }

    /// Flatten into `field -> message`.
    ///
    /// Only the first message per field is kept. Object errors are joined
    /// under [`GLOBAL_ERROR_KEY`].
    pub fn to_error_map(&self) -> IndexMap<String, String> {
        let mut map: IndexMap<String, String> = self
            .field_errors
            .iter()
            .filter_map(|(field, errors)| {
                errors
                    .first()
                    .map(|error| (field.to_string(), error.message.clone()))
            })
            .collect();

        if !self.global_errors.is_empty() {
            let messages: Vec<&str> = self
                .global_errors
                .iter()
                .map(|error| error.message.as_str())
                .collect();
            map.insert(GLOBAL_ERROR_KEY.to_string(), messages.join(" "));
        }

        map
    }

    /// Convert into `validator::ValidationErrors`.
    ///
    /// Each error carries its code, message and params: the violation's
    /// named arguments, the rejected `value` for field errors, and the
    /// message `codes` chain. Object errors land under [`SCHEMA_ERROR_KEY`].
    pub fn to_validation_errors(&self) -> validator::ValidationErrors {
        let mut errors = validator::ValidationErrors::new();

        for (field, field_errors) in &self.field_errors {
            for error in field_errors {
                let mut converted = convert(&error.violation, error.message.clone());
                converted.add_param(Cow::Borrowed("value"), &error.rejected_value);
                converted.add_param(
                    Cow::Borrowed("codes"),
                    &error.message_codes(self.object_name),
                );
                errors.add(*field, converted);
            }
        }

        for error in &self.global_errors {
            let mut converted = convert(&error.violation, error.message.clone());
            converted.add_param(
                Cow::Borrowed("codes"),
                &error.message_codes(self.object_name),
            );
            errors.add(SCHEMA_ERROR_KEY, converted);
        }

        errors
    }
}

fn convert(violation: &Violation, message: String) -> validator::ValidationError {
    let mut error =
        validator::ValidationError::new(violation.code()).with_message(Cow::Owned(message));
    for (name, value) in violation.params() {
        error.add_param(Cow::Borrowed(name), &value);
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ValidationResult {
        let mut result = ValidationResult::new("item");
        result.reject_value(
            "price",
            Violation::Range {
                min: 1000,
                max: 1000000,
            },
            100,
        );
        result.reject(Violation::TotalPriceMin {
            min: 10000,
            actual: 100,
        });
        result
    }

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new("item");
        assert!(result.is_valid());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert!(result.to_error_map().is_empty());
    }

    #[test]
    fn test_reject_value_records_field_error() {
        let result = sample();

        assert!(result.has_errors());
        assert!(result.has_field_errors("price"));
        assert!(!result.has_field_errors("quantity"));

        let errors = result.field_errors("price");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "range");
        assert_eq!(errors[0].rejected_value, json!(100));
        assert_eq!(errors[0].message, "price must be between 1000 and 1000000");
    }

    #[test]
    fn test_global_error_alone_makes_result_invalid() {
        let mut result = ValidationResult::new("item");
        result.reject(Violation::TotalPriceMin {
            min: 10000,
            actual: 1,
        });
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_fields_keep_rejection_order() {
        let mut result = ValidationResult::new("item");
        result.reject_value("quantity", Violation::Max { max: 9999 }, Value::Null);
        result.reject_value("itemName", Violation::Required, "");
        let fields: Vec<_> = result.fields().collect();
        assert_eq!(fields, vec!["quantity", "itemName"]);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "fieldErrors": {
                    "price": [{
                        "code": "range",
                        "min": 1000,
                        "max": 1000000,
                        "message": "price must be between 1000 and 1000000",
                        "rejectedValue": 100
                    }]
                },
                "globalErrors": [{
                    "code": "totalPriceMin",
                    "min": 10000,
                    "actual": 100,
                    "message": "price * quantity must be at least 10000 (current value 100)"
                }]
            })
        );
    }

    #[test]
    fn test_error_map_flattens_global_errors() {
        let map = sample().to_error_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["price"], "price must be between 1000 and 1000000");
        assert_eq!(
            map[GLOBAL_ERROR_KEY],
            "price * quantity must be at least 10000 (current value 100)"
        );
    }

    #[test]
    fn test_message_codes() {
        let result = sample();
        assert_eq!(
            result.field_errors("price")[0].message_codes("item"),
            vec!["range.item.price", "range.price", "range"]
        );
        assert_eq!(
            result.global_errors()[0].message_codes("item"),
            vec!["totalPriceMin.item", "totalPriceMin"]
        );
    }

    #[test]
    fn test_validation_errors_adapter() {
        let errors = sample().to_validation_errors();
        assert!(!errors.is_empty());

        let value = serde_json::to_value(&errors).unwrap();
        let price = &value["price"][0];
        assert_eq!(price["code"], "range");
        assert_eq!(price["params"]["min"], 1000);
        assert_eq!(price["params"]["max"], 1000000);
        assert_eq!(price["params"]["value"], 100);
        assert_eq!(price["params"]["codes"][0], "range.item.price");

        let global = &value[SCHEMA_ERROR_KEY][0];
        assert_eq!(global["code"], "totalPriceMin");
        assert_eq!(global["params"]["actual"], 100);
    }
}
