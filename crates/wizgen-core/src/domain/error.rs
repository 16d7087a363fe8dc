//! Domain errors: configuration validation failures.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (pure data, no I/O sources)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("a database was selected but no backend framework is present")]
    DatabaseRequiresBackend,

    #[error("middleware '{middleware}' is not supported by the {backend} backend")]
    MiddlewareNotSupported {
        middleware: String,
        backend: String,
    },

    #[error("unknown middleware: {0}")]
    UnknownMiddleware(String),

    #[error("a backend-less project must select a frontend framework")]
    FrontendRequired,

    #[error("unknown {field}: {value}")]
    UnknownOption { field: String, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Follow npm package naming rules: lowercase letters, digits, '-', '.', '_'".into(),
                "A scoped name like @myorg/my-api is also accepted".into(),
            ],
            Self::DatabaseRequiresBackend => vec![
                "Pick a backend with --backend express or --backend fastify".into(),
                "Or drop the --database flag for a frontend-only project".into(),
            ],
            Self::MiddlewareNotSupported {
                middleware,
                backend,
            } => vec![
                format!("'{middleware}' cannot be wired into a {backend} server"),
                "Express accepts: cors, helmet, morgan, express-rate-limit".into(),
                "Fastify accepts: @fastify/cors, @fastify/helmet, @fastify/rate-limit".into(),
            ],
            Self::UnknownMiddleware(name) => vec![
                format!("'{name}' is not a middleware wizgen knows about"),
                "Run wizgen new --help for the supported list".into(),
            ],
            Self::FrontendRequired => vec![
                "Pick a frontend with --frontend react or --frontend vue".into(),
                "Or pick a backend to generate a server project".into(),
            ],
            Self::UnknownOption { field, value } => vec![
                format!("'{value}' is not a supported {field}"),
                "Run wizgen new --help for the supported values".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

/// Coarse error classification used for display styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
