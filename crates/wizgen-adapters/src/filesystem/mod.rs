//! Filesystem adapters: the real tokio-backed one and an in-memory
//! double for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
