//! Application-layer errors: failures of ports and use cases.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::ErrorCategory;

/// Errors raised by the orchestration layer and its ports.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A required template unit was not found in the source.
    ///
    /// Carries the logical unit name, never a filesystem path.
    #[error("missing template unit: {unit}")]
    MissingTemplate { unit: String },

    /// A patch was requested against a file that does not exist.
    #[error("cannot patch missing file: {path}")]
    PatchTargetMissing { path: PathBuf },

    #[error("filesystem operation failed at {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("external command failed: {command}: {reason}")]
    ExternalProcess { command: String, reason: String },
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn process(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalProcess {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTemplate { unit } => vec![
                format!("No built-in template provides '{unit}'"),
                "This points at a packaging problem; please report it".into(),
            ],
            Self::PatchTargetMissing { path } => vec![
                format!("Expected {} to exist before integration", path.display()),
                "Re-run the generation from an empty target directory".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Check permissions and free space for {}", path.display()),
            ],
            Self::ExternalProcess { command, .. } => vec![
                format!("Make sure '{command}' is installed and on PATH"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate { .. } => ErrorCategory::NotFound,
            Self::PatchTargetMissing { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } | Self::ExternalProcess { .. } => ErrorCategory::Internal,
        }
    }
}
