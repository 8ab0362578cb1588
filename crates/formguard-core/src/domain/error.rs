// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::{domain::field::FieldId, error::ErrorCategory};

/// Root domain error type.
///
/// Validation failures are never errors; these cover naming the fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownField { name } => {
                let mut out = vec![
                    format!("'{}' is not a form field", name),
                    "Known fields:".into(),
                ];
                out.extend(FieldId::ALL.iter().map(|f| format!("  • {}", f)));
                out
            }
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownField { .. } => ErrorCategory::NotFound,
        }
    }
}
