//! Configuration model: the validated record of user-selected options.
//!
//! # Design
//!
//! These are pure value types — `Copy` where possible, equality-by-value,
//! no identity. Rather than a bag of optional fields whose validity depends
//! on other fields ("database only matters if a backend exists"), the
//! project shape is a tagged variant: each variant carries only the fields
//! meaningful to it, so most cross-field violations are unrepresentable.

use crate::domain::error::DomainError;
use crate::domain::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    /// Extension used by generated source files.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(DomainError::UnknownOption {
                field: "language".into(),
                value: other.to_string(),
            }),
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

/// A supported backend framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Express,
    Fastify,
}

impl Backend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Fastify => "fastify",
        }
    }

    /// npm package implementing this framework.
    pub const fn package(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Database ──────────────────────────────────────────────────────────────────

/// A supported database layer. Only meaningful alongside a backend; the
/// shape variants enforce that structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    MongoDb,
    PostgreSql,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MongoDb => "mongodb",
            Self::PostgreSql => "postgresql",
        }
    }

    /// Runtime packages pulled in by this database selection.
    pub const fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::MongoDb => &["mongoose"],
            Self::PostgreSql => &["sequelize", "pg"],
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Middleware ────────────────────────────────────────────────────────────────

/// HTTP middleware selectable per backend.
///
/// Each variant knows which backend it belongs to; selecting an Express
/// middleware under Fastify is a construction-time error, never a silent
/// omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Middleware {
    Cors,
    Helmet,
    Morgan,
    ExpressRateLimit,
    FastifyCors,
    FastifyHelmet,
    FastifyRateLimit,
}

impl Middleware {
    /// User-facing (and npm package) name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::Helmet => "helmet",
            Self::Morgan => "morgan",
            Self::ExpressRateLimit => "express-rate-limit",
            Self::FastifyCors => "@fastify/cors",
            Self::FastifyHelmet => "@fastify/helmet",
            Self::FastifyRateLimit => "@fastify/rate-limit",
        }
    }

    /// npm package providing this middleware.
    pub const fn package(&self) -> &'static str {
        self.as_str()
    }

    /// The backend this middleware can be wired into.
    pub const fn backend(&self) -> Backend {
        match self {
            Self::Cors | Self::Helmet | Self::Morgan | Self::ExpressRateLimit => Backend::Express,
            Self::FastifyCors | Self::FastifyHelmet | Self::FastifyRateLimit => Backend::Fastify,
        }
    }

    /// File stem for the generated middleware module (no scope prefix,
    /// usable as a file name).
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::Helmet => "helmet",
            Self::Morgan => "morgan",
            Self::ExpressRateLimit => "rate-limit",
            Self::FastifyCors => "cors",
            Self::FastifyHelmet => "helmet",
            Self::FastifyRateLimit => "rate-limit",
        }
    }
}

impl fmt::Display for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Middleware {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cors" => Ok(Self::Cors),
            "helmet" => Ok(Self::Helmet),
            "morgan" => Ok(Self::Morgan),
            "express-rate-limit" => Ok(Self::ExpressRateLimit),
            "@fastify/cors" => Ok(Self::FastifyCors),
            "@fastify/helmet" => Ok(Self::FastifyHelmet),
            "@fastify/rate-limit" => Ok(Self::FastifyRateLimit),
            other => Err(DomainError::UnknownMiddleware(other.to_string())),
        }
    }
}

// ── Frontend ──────────────────────────────────────────────────────────────────

/// A supported frontend framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    React,
    Vue,
}

impl Frontend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
        }
    }

    /// Runtime packages for a frontend-only manifest.
    pub const fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::React => &["react", "react-dom"],
            Self::Vue => &["vue"],
        }
    }

    /// Vite plugin matching this framework.
    pub const fn vite_plugin(&self) -> &'static str {
        match self {
            Self::React => "@vitejs/plugin-react",
            Self::Vue => "@vitejs/plugin-vue",
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Authentication ────────────────────────────────────────────────────────────

/// Authentication wiring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    Jwt,
}

impl AuthStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jwt => "jwt",
        }
    }
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Bundler ───────────────────────────────────────────────────────────────────

/// Frontend bundler. Fixed to a single default for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    #[default]
    Vite,
}

impl Bundler {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vite => "vite",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// Project name validated against the npm package-name grammar.
///
/// Invariant: satisfies `validation::check_package_name` at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validation::check_package_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── ProjectShape ──────────────────────────────────────────────────────────────

/// Options describing the server half of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendOptions {
    pub backend: Backend,
    pub database: Option<Database>,
    pub middleware: Vec<Middleware>,
    pub auth: Option<AuthStrategy>,
}

impl BackendOptions {
    /// Check that every selected middleware belongs to the chosen backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        for mw in &self.middleware {
            if mw.backend() != self.backend {
                return Err(DomainError::MiddlewareNotSupported {
                    middleware: mw.to_string(),
                    backend: self.backend.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The overall project shape.
///
/// A backend-less project must carry a frontend (`FrontendOnly` has no
/// "none" slot), and a database can only appear on shapes that carry a
/// backend.  Both rules hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectShape {
    BackendOnly(BackendOptions),
    FrontendOnly { frontend: Frontend },
    Fullstack {
        backend: BackendOptions,
        frontend: Frontend,
    },
}

impl ProjectShape {
    pub fn backend(&self) -> Option<&BackendOptions> {
        match self {
            Self::BackendOnly(b) | Self::Fullstack { backend: b, .. } => Some(b),
            Self::FrontendOnly { .. } => None,
        }
    }

    pub fn frontend(&self) -> Option<Frontend> {
        match self {
            Self::FrontendOnly { frontend } | Self::Fullstack { frontend, .. } => Some(*frontend),
            Self::BackendOnly(_) => None,
        }
    }

    pub fn database(&self) -> Option<Database> {
        self.backend().and_then(|b| b.database)
    }

    pub fn auth(&self) -> Option<AuthStrategy> {
        self.backend().and_then(|b| b.auth)
    }

    pub fn middleware(&self) -> &[Middleware] {
        self.backend().map_or(&[], |b| b.middleware.as_slice())
    }

    pub fn is_frontend_only(&self) -> bool {
        matches!(self, Self::FrontendOnly { .. })
    }

    pub fn is_fullstack(&self) -> bool {
        matches!(self, Self::Fullstack { .. })
    }
}

// ── ProjectConfig ─────────────────────────────────────────────────────────────

/// The validated configuration driving one generation run.
///
/// Created once (by the prompt/flag layer), immutable for the lifetime of
/// the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: ProjectName,
    pub language: Language,
    pub shape: ProjectShape,
    pub bundler: Bundler,
    pub git_init: bool,
    pub install_deps: bool,
}

impl ProjectConfig {
    /// Re-run the cross-field checks.
    ///
    /// Most violations are unrepresentable thanks to the shape enum; this
    /// remains the single entry-point the orchestrator's `validate` task
    /// calls, and it still catches middleware/backend mismatches.
    pub fn validate(&self) -> Result<(), DomainError> {
        validation::check_package_name(self.name.as_str())?;
        if let Some(backend) = self.shape.backend() {
            backend.validate()?;
        }
        Ok(())
    }

    /// Extension used by generated source files (`js` or `ts`).
    pub fn file_extension(&self) -> &'static str {
        self.language.file_extension()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
