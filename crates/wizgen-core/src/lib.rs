//! Wizgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the wizgen
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           wizgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, render_tree)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateSource, Filesystem, Process)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wizgen-adapters (Infrastructure)     │
//! │ (BuiltinTemplates, LocalFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectConfig, DependencySet, patch)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError,
        ports::{Filesystem, ProcessRunner, StdioMode, TemplateSource},
        services::{next_steps, plan, scaffold_dirs, GenerateService},
    };
    pub use crate::domain::{
        AuthStrategy, Backend, BackendOptions, Bundler, Database, DomainError, ErrorCategory,
        Frontend, Language, Middleware, ProjectConfig, ProjectName, ProjectShape, RenderContext,
        TemplateNode, TemplateTree,
    };
    pub use crate::error::{WizgenError, WizgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
