//! Infrastructure adapters for wizgen.
//!
//! This crate implements the ports defined in `wizgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplates;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemProcessRunner;
