//! Field source loaded from a submission file (`.json` or `.toml`).

use std::path::{Path, PathBuf};

use formguard_core::{
    application::{ApplicationError, ports::FieldSource},
    domain::{FieldId, FieldValues},
    error::FormGuardResult,
};
use tracing::{debug, instrument};

/// Submission file formats understood by [`FileFieldSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFormat {
    Json,
    Toml,
}

impl SubmissionFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> FormGuardResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedFormat { extension }.into()),
        }
    }
}

/// Field source holding the values read from a file at load time.
#[derive(Debug, Clone)]
pub struct FileFieldSource {
    path: PathBuf,
    values: FieldValues,
}

impl FileFieldSource {
    /// Read and parse the submission at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> FormGuardResult<Self> {
        let path = path.as_ref();
        let format = SubmissionFormat::from_path(path)?;

        let content =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::SubmissionUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let values = Self::parse(&content, format).map_err(|reason| {
            ApplicationError::SubmissionMalformed {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        debug!(?format, "Submission loaded");
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Parse submission text in the given format.
    pub fn parse(content: &str, format: SubmissionFormat) -> Result<FieldValues, String> {
        match format {
            SubmissionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SubmissionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }
}

impl FieldSource for FileFieldSource {
    fn value(&self, field: FieldId) -> String {
        self.values.get(field).to_string()
    }
}
