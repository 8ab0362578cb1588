//! Core domain layer for formguard.
//!
//! Pure validation logic: the field model, the grammars, and the ordered rule
//! set. Reading values and displaying messages are handled via ports (traits)
//! defined in the application layer.
//!
//! - **No I/O**: values arrive as plain strings
//! - **No async**: every check is synchronous
//! - **Fresh state**: each evaluation builds a new [`ValidationResult`]
pub mod error;
pub mod field;
pub mod grammar;
pub mod messages;
pub mod result;

mod validation;

pub use error::DomainError;
pub use field::{FieldId, FieldValues, trim_field};
pub use grammar::{PasswordRequirement, is_valid_email, is_valid_password, is_valid_phone};
pub use result::{FieldError, ValidationResult};
pub use validation::FormRules;
