//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use wizgen_core::domain::{AuthStrategy, Backend, Database, Frontend, Language};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wizgen",
    bin_name = "wizgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Node.js web project generator",
    long_about = "Wizgen scaffolds ready-to-run Node.js web projects: Express or \
                  Fastify backends, React or Vue frontends, database wiring and \
                  JWT authentication.",
    after_help = "EXAMPLES:\n\
        \x20 wizgen new my-api --backend express --database mongodb\n\
        \x20 wizgen new my-app --backend fastify --frontend react --auth jwt\n\
        \x20 wizgen new my-site --frontend vue --lang typescript\n\
        \x20 wizgen completions bash > /usr/share/bash-completion/completions/wizgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 wizgen new my-api --backend express --database postgresql\n\
            \x20 wizgen new my-app --backend fastify --frontend vue --lang typescript\n\
            \x20 wizgen new my-site --frontend react"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wizgen completions bash > ~/.local/share/bash-completion/completions/wizgen\n\
            \x20 wizgen completions zsh  > ~/.zfunc/_wizgen\n\
            \x20 wizgen completions fish > ~/.config/fish/completions/wizgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `wizgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Source language for the generated project.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "JavaScript or TypeScript"
    )]
    pub language: Option<LanguageArg>,

    /// Backend framework.
    #[arg(
        short = 'b',
        long = "backend",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Backend framework (express, fastify)"
    )]
    pub backend: Option<BackendArg>,

    /// Database integration.  Requires a backend.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database to wire up (mongodb, postgresql)"
    )]
    pub database: Option<DatabaseArg>,

    /// Middleware packages, repeatable or comma-separated.
    #[arg(
        short = 'm',
        long = "middleware",
        value_name = "NAME",
        value_delimiter = ',',
        help = "Middleware to install (e.g. cors, helmet, morgan)"
    )]
    pub middleware: Vec<String>,

    /// Frontend framework.
    #[arg(
        short = 'f',
        long = "frontend",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Frontend framework (react, vue)"
    )]
    pub frontend: Option<FrontendArg>,

    /// Authentication scaffolding.  Requires a backend.
    #[arg(
        long = "auth",
        value_name = "STRATEGY",
        value_enum,
        help = "Authentication strategy (jwt)"
    )]
    pub auth: Option<AuthArg>,

    /// Initialise a git repository in the project.
    #[arg(long = "git", help = "Run git init in the new project")]
    pub git: bool,

    /// Run `npm install` after generation.
    #[arg(long = "install", help = "Install npm dependencies after generation")]
    pub install: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Write into an existing directory.
    #[arg(long = "force", help = "Generate into an existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wizgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LanguageArg {
    /// Also accepted as `js`.
    #[value(alias = "js")]
    JavaScript,
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::JavaScript => Language::JavaScript,
            LanguageArg::TypeScript => Language::TypeScript,
        }
    }
}

/// Supported backend frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BackendArg {
    Express,
    Fastify,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Express => Backend::Express,
            BackendArg::Fastify => Backend::Fastify,
        }
    }
}

/// Supported databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    /// Also accepted as `mongo`.
    #[value(alias = "mongo")]
    Mongodb,
    /// Also accepted as `postgres` or `pg`.
    #[value(alias = "postgres", alias = "pg")]
    Postgresql,
}

impl From<DatabaseArg> for Database {
    fn from(value: DatabaseArg) -> Self {
        match value {
            DatabaseArg::Mongodb => Database::MongoDb,
            DatabaseArg::Postgresql => Database::PostgreSql,
        }
    }
}

/// Supported frontend frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrontendArg {
    React,
    Vue,
}

impl From<FrontendArg> for Frontend {
    fn from(value: FrontendArg) -> Self {
        match value {
            FrontendArg::React => Frontend::React,
            FrontendArg::Vue => Frontend::Vue,
        }
    }
}

/// Supported authentication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AuthArg {
    Jwt,
}

impl From<AuthArg> for AuthStrategy {
    fn from(value: AuthArg) -> Self {
        match value {
            AuthArg::Jwt => AuthStrategy::Jwt,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "wizgen",
            "new",
            "my-project",
            "--backend",
            "express",
            "--database",
            "mongodb",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn typescript_alias() {
        let cli = Cli::parse_from(["wizgen", "new", "test", "-l", "ts", "-b", "express"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.language, Some(LanguageArg::TypeScript));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn database_aliases() {
        let cli = Cli::parse_from(["wizgen", "new", "test", "-b", "fastify", "-d", "pg"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.database, Some(DatabaseArg::Postgresql));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn middleware_comma_separated() {
        let cli = Cli::parse_from([
            "wizgen",
            "new",
            "test",
            "-b",
            "express",
            "-m",
            "cors,helmet",
            "-m",
            "morgan",
        ]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.middleware, vec!["cors", "helmet", "morgan"]);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["wizgen", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
