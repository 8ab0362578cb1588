//! Application layer errors.
//!
//! These errors come from loading submissions for the validator, not from the
//! rules. A failing rule is data in a `ValidationResult`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while preparing a validation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A submission file could not be read.
    #[error("Cannot read submission at {path}: {reason}")]
    SubmissionUnreadable { path: PathBuf, reason: String },

    /// A submission file was read but does not match the field schema.
    #[error("Malformed submission at {path}: {reason}")]
    SubmissionMalformed { path: PathBuf, reason: String },

    /// The submission file type is not one we can parse.
    #[error("Unsupported submission format '{extension}'")]
    UnsupportedFormat { extension: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SubmissionUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::SubmissionMalformed { .. } => vec![
                "Submissions are objects keyed by field name".into(),
                "Allowed keys: username, email, phone, password, confirmPassword".into(),
                "Missing keys are treated as empty".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Use a .json or .toml file".into(),
                "Or pass the fields as flags: formguard validate --username ...".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SubmissionUnreadable { .. } => ErrorCategory::NotFound,
            Self::SubmissionMalformed { .. } | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
