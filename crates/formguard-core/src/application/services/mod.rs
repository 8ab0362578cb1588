//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "validate the submitted form".

pub mod form_validator;

pub use form_validator::FormValidator;
