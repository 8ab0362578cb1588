//! Infrastructure adapters for formguard.
//!
//! This crate implements the ports defined in `formguard-core::application::ports`.
//! It contains all I/O: reading submission files and holding displayed messages.

pub mod sink;
pub mod source;

// Re-export commonly used adapters
pub use sink::MemoryErrorSink;
pub use source::{FileFieldSource, MemoryFieldSource, SubmissionFormat};
