//! Driven (output) ports - implemented by infrastructure.
//!
//! The validator assumes both collaborators are wired for all five fields,
//! so neither method can fail.

use crate::domain::FieldId;

/// Port for reading field values.
///
/// Implemented by:
/// - `formguard_adapters::MemoryFieldSource` (flags, prompts, testing)
/// - `formguard_adapters::FileFieldSource` (JSON/TOML submissions)
#[cfg_attr(test, mockall::automock)]
pub trait FieldSource: Send + Sync {
    /// Current raw value of `field`, untrimmed.
    fn value(&self, field: FieldId) -> String;
}

/// Port for presenting error text.
///
/// Implemented by:
/// - `formguard_adapters::MemoryErrorSink` (CLI rendering, testing)
///
/// An empty `message` clears the slot.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    fn set_error_text(&self, field: FieldId, message: &str);
}
