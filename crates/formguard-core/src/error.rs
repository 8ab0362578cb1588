//! Unified error handling for formguard core.
//!
//! Wraps domain and application errors with user-actionable suggestions.
//! Rule failures are not errors and never appear here.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for formguard core operations.
#[derive(Debug, Error, Clone)]
pub enum FormGuardError {
    /// Errors from the domain layer (field naming).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading submissions).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FormGuardError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// Convenient result type alias.
pub type FormGuardResult<T> = Result<T, FormGuardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unknown_field_lists_known_fields() {
        let err: FormGuardError = DomainError::UnknownField {
            name: "age".into(),
        }
        .into();
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("confirmPassword")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn malformed_submission_is_a_validation_error() {
        let err: FormGuardError = ApplicationError::SubmissionMalformed {
            path: PathBuf::from("form.json"),
            reason: "expected object".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("form.json"));
    }
}
