//! Ports: the traits adapters implement.
//!
//! The core never performs I/O directly; everything effectful goes through
//! these traits so the orchestrator can be driven against in-memory
//! doubles in tests.

use std::path::Path;

use async_trait::async_trait;

use crate::application::error::ApplicationError;
use crate::domain::template::TemplateTree;

/// How an external command's stdio is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Capture output; surface it only in the error path.
    Captured,
    /// Let the child write straight to the user's terminal.
    Inherited,
}

/// Output filesystem operations.
///
/// Writes are whole-file and creation-oriented; the pipeline never deletes.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create `path` and any missing parents. Idempotent.
    async fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Write `contents` to `path`, replacing any existing file.
    async fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError>;

    async fn read_to_string(&self, path: &Path) -> Result<String, ApplicationError>;

    async fn exists(&self, path: &Path) -> bool;
}

/// Source of template units, addressed by logical path.
///
/// Logical paths name units (`express/server.js`, `frontend/react`), never
/// storage locations. `None` means the source has no such unit; whether
/// that is an error is the caller's call.
pub trait TemplateSource: Send + Sync {
    fn unit(&self, logical_path: &str) -> Option<TemplateTree>;
}

/// Runner for external commands (git, npm).
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stdio: StdioMode,
    ) -> Result<(), ApplicationError>;
}
