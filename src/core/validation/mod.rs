//! Validation of submitted items
//!
//! [`validate`] applies the fixed item rule-set and returns a
//! [`ValidationResult`]. Callers choose how to surface it: a flat error map,
//! a `validator::ValidationErrors` document, or the result itself through
//! the [`Validated`] extractor.

pub mod extractor;
pub mod result;
pub mod rules;
pub mod violation;

pub use extractor::{Rejected, Validated};
pub use result::{FieldError, GlobalError, ValidationResult};
pub use rules::{ItemValidator, Validator, validate};
pub use violation::Violation;
