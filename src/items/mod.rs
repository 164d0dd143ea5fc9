//! Item CRUD endpoints, in three validation-reporting versions
//!
//! | Version | Prefix | Error shape on 422 |
//! |---|---|---|
//! | v1 | `/validation/v1/items` | `field -> message` map |
//! | v2 | `/validation/v2/items` | `validator::ValidationErrors` |
//! | v3 | `/validation/v3/items` | `ValidationResult` via [`Validated`](crate::core::validation::Validated) |

pub mod handlers;
pub mod v1;
pub mod v2;
pub mod v3;

pub use handlers::AppState;
