//! Local filesystem adapter using tokio::fs.

use std::path::Path;

use async_trait::async_trait;
use wizgen_core::application::{ports::Filesystem, ApplicationError};

/// Production filesystem implementation backed by `tokio::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| ApplicationError::filesystem(path, e))
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| ApplicationError::filesystem(path, e))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, ApplicationError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApplicationError::filesystem(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
