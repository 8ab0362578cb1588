//! Field source adapters.

mod file;
mod memory;

pub use file::{FileFieldSource, SubmissionFormat};
pub use memory::MemoryFieldSource;
