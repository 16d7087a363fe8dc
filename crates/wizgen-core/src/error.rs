//! Unified error type for the core crate.

use thiserror::Error;

use crate::application::error::ApplicationError;
use crate::domain::error::{DomainError, ErrorCategory};

/// Root error type for everything the core can fail with.
#[derive(Debug, Error)]
pub enum WizgenError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// A pipeline task failed; names the task for the user-facing report.
    #[error("task '{task}' failed")]
    TaskFailed {
        task: String,
        #[source]
        source: Box<WizgenError>,
    },
}

/// Convenience alias used throughout the codebase.
pub type WizgenResult<T> = Result<T, WizgenError>;

impl WizgenError {
    /// Wrap an error as the failure of a named pipeline task.
    pub fn task(task: impl Into<String>, source: impl Into<WizgenError>) -> Self {
        Self::TaskFailed {
            task: task.into(),
            source: Box::new(source.into()),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::TaskFailed { source, .. } => source.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::TaskFailed { source, .. } => source.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_failure_delegates_category_to_cause() {
        let err = WizgenError::task(
            "generate",
            ApplicationError::MissingTemplate {
                unit: "express/server.js".into(),
            },
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("generate"));
    }

    #[test]
    fn domain_errors_convert() {
        let err: WizgenError = DomainError::FrontendRequired.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
