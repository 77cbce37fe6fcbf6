//! Form domain layer
//!
//! Type-safe field values, the declarative step registry, the in-progress
//! application form, and the step validator.

mod application;
mod field;
pub mod registry;
mod validate;

pub use application::ApplicationForm;
pub use field::{FieldValue, FormField};
pub use validate::{validate_all, validate_step, ValidationResult};
