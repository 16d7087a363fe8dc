//! Domain layer: pure types and pure functions, no I/O.

pub mod config;
pub mod context;
pub mod dependencies;
pub mod envfile;
pub mod error;
pub mod patch;
pub mod template;
pub mod validation;

pub use config::{
    AuthStrategy, Backend, BackendOptions, Bundler, Database, Frontend, Language, Middleware,
    ProjectConfig, ProjectName, ProjectShape,
};
pub use context::RenderContext;
pub use dependencies::DependencySet;
pub use error::{DomainError, ErrorCategory};
pub use patch::{Insertion, Placement};
pub use template::{TemplateNode, TemplateTree};
