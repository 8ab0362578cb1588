//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `formguard-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `FieldSource`: supplies the current raw value of a field
//!   - `ErrorSink`: presents a field's current error text
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI drives `FormValidator` directly)

pub mod output;

pub use output::{ErrorSink, FieldSource};

#[cfg(test)]
pub use output::{MockErrorSink, MockFieldSource};
