//! Error sink adapters.

mod memory;

pub use memory::MemoryErrorSink;
