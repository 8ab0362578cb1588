//! Application layer for formguard.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormValidator)
//! - **Ports**: Interface definitions (traits) for the field source and error sink
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::FormValidator;

// Re-export port traits (for adapter implementation)
pub use ports::{ErrorSink, FieldSource};

pub use error::ApplicationError;
