//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use wizgen_core::application::{ports::Filesystem, ApplicationError};

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can hand one clone to the
/// service and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Whether a directory was created.
    pub fn has_directory(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("lock poisoned");
        inner.directories.contains(path)
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("lock poisoned");
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, ApplicationError> {
        let inner = self.inner.read().expect("lock poisoned");
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::filesystem(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            )
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("lock poisoned");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        clone.write(Path::new("/a.txt"), "x").await.unwrap();
        assert_eq!(fs.read_file(Path::new("/a.txt")).unwrap(), "x");
    }

    #[tokio::test]
    async fn create_dir_all_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).await.unwrap();
        assert!(fs.has_directory(Path::new("/a")));
        assert!(fs.has_directory(Path::new("/a/b")));
        assert!(fs.has_directory(Path::new("/a/b/c")));
    }
}
