//! formguard Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating the
//! five-field sign-up form (username, email, phone, password, confirmPassword),
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          formguard-cli (CLI)            │
//! │  (flags / file / prompts -> validate)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (FormValidator)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: FieldSource, ErrorSink)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    formguard-adapters (Infrastructure)  │
//! │ (MemoryFieldSource, FileFieldSource,    │
//! │  MemoryErrorSink)                       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FieldId, grammars, FormRules, result) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use formguard_core::prelude::*;
//!
//! let values = FieldValues::new()
//!     .with(FieldId::Username, "alice")
//!     .with(FieldId::Email, "a@abc.com")
//!     .with(FieldId::Phone, "1234567890")
//!     .with(FieldId::Password, "Abc1234&")
//!     .with(FieldId::ConfirmPassword, "Abc1234&");
//!
//! assert!(FormValidator::check(&values).is_valid());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormValidator,
        ports::{ErrorSink, FieldSource},
    };
    pub use crate::domain::{
        FieldError, FieldId, FieldValues, FormRules, PasswordRequirement, ValidationResult,
    };
    pub use crate::error::{FormGuardError, FormGuardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
