//! Implementation of the `wizgen new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, call the
//! core generation service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use wizgen_adapters::{BuiltinTemplates, LocalFilesystem, SystemProcessRunner};
use wizgen_core::{
    application::services::{next_steps, plan, GenerateService},
    domain::{
        Backend, BackendOptions, Bundler, Frontend, Language, Middleware, ProjectConfig,
        ProjectName, ProjectShape,
    },
};

use crate::{
    cli::{global::GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `wizgen new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / output path
/// 2. Convert CLI args to a core `ProjectConfig`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Check the target directory, then run the generation pipeline
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub async fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, project_path) = resolve_project_path(&args.name)?;

    // 2. Build the project configuration
    let project = build_config(&project_name, &args, &config)?;

    debug!(
        language = %project.language,
        backend = project.shape.backend().map(|b| b.backend.to_string()).as_deref().unwrap_or("none"),
        frontend = project.shape.frontend().map(|f| f.to_string()).as_deref().unwrap_or("none"),
        database = project.shape.database().map(|d| d.to_string()).as_deref().unwrap_or("none"),
        "Configuration resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&project, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project.name,
            project_path.display(),
        ))?;
        for task in plan(&project) {
            output.list_item(task)?;
        }
        return Ok(());
    }

    // 5. Check for existing directory
    if project_path.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 6. Create adapters and generate
    let service = GenerateService::new(
        BuiltinTemplates::new(),
        LocalFilesystem::new(),
        SystemProcessRunner::new(),
    );

    output.header(&format!("Creating '{}'...", project.name))?;
    info!(project = %project.name, path = %project_path.display(), "Generation started");

    service
        .generate(&project, &project_path)
        .await
        .map_err(CliError::Core)?;

    info!(project = %project.name, "Generation completed");

    // 7. Success + next steps
    output.success(&format!("Project '{}' created!", project.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&project) {
            output.list_item(&step)?;
        }
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the user-supplied name into (leaf name, full project path).
///
/// A plain name creates `./name`; a path like `apps/my-api` keeps the full
/// path and uses the leaf as the project name.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

// ── Config construction ───────────────────────────────────────────────────────

fn build_config(name: &str, args: &NewArgs, config: &AppConfig) -> CliResult<ProjectConfig> {
    let name = ProjectName::new(name).map_err(|e| CliError::InvalidProjectName {
        name: name.into(),
        reason: e.to_string(),
    })?;

    let language = resolve_language(args, config)?;
    let shape = build_shape(args)?;

    Ok(ProjectConfig {
        name,
        language,
        shape,
        bundler: Bundler::default(),
        git_init: args.git || config.defaults.git_init,
        install_deps: args.install || config.defaults.install_deps,
    })
}

/// CLI flag wins; otherwise the config file default; otherwise JavaScript.
fn resolve_language(args: &NewArgs, config: &AppConfig) -> CliResult<Language> {
    if let Some(lang) = args.language {
        return Ok(lang.into());
    }
    match config.defaults.language.as_deref() {
        None => Ok(Language::JavaScript),
        Some(raw) => raw.parse::<Language>().map_err(|_| CliError::ConfigError {
            message: format!("defaults.language '{raw}' is not javascript or typescript"),
            source: None,
        }),
    }
}

/// Combine the backend/frontend/database/auth flags into a project shape.
///
/// Shapes that make no sense (database without a backend, neither side
/// selected) are rejected here with actionable errors rather than deep in
/// the pipeline.
fn build_shape(args: &NewArgs) -> CliResult<ProjectShape> {
    match (args.backend, args.frontend) {
        (Some(backend), frontend) => {
            let backend: Backend = backend.into();
            let options = BackendOptions {
                backend,
                database: args.database.map(Into::into),
                middleware: parse_middleware(backend, &args.middleware)?,
                auth: args.auth.map(Into::into),
            };
            options.validate().map_err(|e| CliError::Core(e.into()))?;

            Ok(match frontend {
                Some(f) => ProjectShape::Fullstack {
                    backend: options,
                    frontend: f.into(),
                },
                None => ProjectShape::BackendOnly(options),
            })
        }

        (None, Some(frontend)) => {
            if args.database.is_some() {
                return Err(CliError::Core(
                    wizgen_core::domain::DomainError::DatabaseRequiresBackend.into(),
                ));
            }
            if args.auth.is_some() {
                return Err(CliError::InvalidInput {
                    message: "--auth requires a backend (--backend express|fastify)".into(),
                    source: None,
                });
            }
            if !args.middleware.is_empty() {
                return Err(CliError::InvalidInput {
                    message: "--middleware requires a backend (--backend express|fastify)".into(),
                    source: None,
                });
            }
            Ok(ProjectShape::FrontendOnly {
                frontend: frontend.into(),
            })
        }

        (None, None) => Err(CliError::Core(
            wizgen_core::domain::DomainError::FrontendRequired.into(),
        )),
    }
}

/// Parse the user-supplied middleware names for the given backend.
///
/// Short names resolve to the backend's package: `cors` means `@fastify/cors`
/// when the backend is Fastify, and `rate-limit` picks the right flavour for
/// either backend.  Unknown names surface the core error with suggestions.
fn parse_middleware(backend: Backend, names: &[String]) -> CliResult<Vec<Middleware>> {
    names
        .iter()
        .map(|raw| {
            let lower = raw.to_ascii_lowercase();
            let canonical = match (backend, lower.as_str()) {
                (Backend::Fastify, "cors") => "@fastify/cors",
                (Backend::Fastify, "helmet") => "@fastify/helmet",
                (Backend::Fastify, "rate-limit") => "@fastify/rate-limit",
                (Backend::Express, "rate-limit") => "express-rate-limit",
                _ => lower.as_str(),
            };
            canonical
                .parse::<Middleware>()
                .map_err(|e| CliError::Core(e.into()))
        })
        .collect()
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    project: &ProjectConfig,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:    {}", project.name))?;
    out.print(&format!("  Language:   {}", project.language))?;
    if let Some(backend) = project.shape.backend() {
        out.print(&format!("  Backend:    {}", backend.backend))?;
        if let Some(db) = backend.database {
            out.print(&format!("  Database:   {db}"))?;
        }
        if !backend.middleware.is_empty() {
            let names: Vec<&str> = backend.middleware.iter().map(|m| m.as_str()).collect();
            out.print(&format!("  Middleware: {}", names.join(", ")))?;
        }
        if let Some(auth) = backend.auth {
            out.print(&format!("  Auth:       {auth}"))?;
        }
    }
    if let Some(frontend) = project.shape.frontend() {
        out.print(&format!("  Frontend:   {frontend}"))?;
    }
    out.print(&format!("  Location:   {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AuthArg, BackendArg, DatabaseArg, FrontendArg, LanguageArg};
    use wizgen_core::domain::Database;

    fn new_args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            language: None,
            backend: None,
            database: None,
            middleware: vec![],
            frontend: None,
            auth: None,
            git: false,
            install: false,
            yes: true,
            force: false,
            dry_run: false,
        }
    }

    // ── resolve_project_path ──────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_to_cwd() {
        let (name, path) = resolve_project_path("my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(path, PathBuf::from("my-app"));
    }

    #[test]
    fn relative_path_keeps_full_path() {
        let (name, path) = resolve_project_path("../my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(path, PathBuf::from("../my-app"));
    }

    #[test]
    fn nested_path_uses_leaf_as_name() {
        let sep = std::path::MAIN_SEPARATOR;
        let raw = format!("apps{sep}my-api");
        let (name, path) = resolve_project_path(&raw).unwrap();
        assert_eq!(name, "my-api");
        assert_eq!(path, PathBuf::from("apps").join("my-api"));
    }

    // ── build_config / build_shape ────────────────────────────────────────

    #[test]
    fn backend_only_shape() {
        let mut args = new_args("my-api");
        args.backend = Some(BackendArg::Express);
        args.database = Some(DatabaseArg::Mongodb);
        let project = build_config("my-api", &args, &AppConfig::default()).unwrap();
        assert_eq!(project.shape.database(), Some(Database::MongoDb));
        assert!(project.shape.frontend().is_none());
    }

    #[test]
    fn fullstack_shape() {
        let mut args = new_args("my-app");
        args.backend = Some(BackendArg::Fastify);
        args.frontend = Some(FrontendArg::Vue);
        let project = build_config("my-app", &args, &AppConfig::default()).unwrap();
        assert!(project.shape.is_fullstack());
    }

    #[test]
    fn database_without_backend_rejected() {
        let mut args = new_args("my-app");
        args.frontend = Some(FrontendArg::React);
        args.database = Some(DatabaseArg::Postgresql);
        let err = build_config("my-app", &args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn auth_without_backend_rejected() {
        let mut args = new_args("my-app");
        args.frontend = Some(FrontendArg::React);
        args.auth = Some(AuthArg::Jwt);
        let err = build_config("my-app", &args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn neither_backend_nor_frontend_rejected() {
        let args = new_args("my-app");
        assert!(build_config("my-app", &args, &AppConfig::default()).is_err());
    }

    #[test]
    fn invalid_name_surfaces_reason() {
        let args = new_args(".hidden");
        let err = build_config(".hidden", &args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
    }

    #[test]
    fn config_default_language_applies() {
        let mut args = new_args("my-api");
        args.backend = Some(BackendArg::Express);
        let mut cfg = AppConfig::default();
        cfg.defaults.language = Some("typescript".into());
        let project = build_config("my-api", &args, &cfg).unwrap();
        assert_eq!(project.language, Language::TypeScript);
    }

    #[test]
    fn cli_language_overrides_config_default() {
        let mut args = new_args("my-api");
        args.backend = Some(BackendArg::Express);
        args.language = Some(LanguageArg::JavaScript);
        let mut cfg = AppConfig::default();
        cfg.defaults.language = Some("typescript".into());
        let project = build_config("my-api", &args, &cfg).unwrap();
        assert_eq!(project.language, Language::JavaScript);
    }

    #[test]
    fn bad_config_language_is_config_error() {
        let mut args = new_args("my-api");
        args.backend = Some(BackendArg::Express);
        let mut cfg = AppConfig::default();
        cfg.defaults.language = Some("cobol".into());
        let err = build_config("my-api", &args, &cfg).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    // ── parse_middleware ──────────────────────────────────────────────────

    #[test]
    fn express_shorthand_names() {
        let mw = parse_middleware(
            Backend::Express,
            &["cors".into(), "helmet".into(), "rate-limit".into()],
        )
        .unwrap();
        assert_eq!(
            mw,
            vec![
                Middleware::Cors,
                Middleware::Helmet,
                Middleware::ExpressRateLimit
            ]
        );
    }

    #[test]
    fn fastify_shorthand_resolves_to_scoped_packages() {
        let mw = parse_middleware(Backend::Fastify, &["cors".into(), "helmet".into()]).unwrap();
        assert_eq!(mw, vec![Middleware::FastifyCors, Middleware::FastifyHelmet]);
    }

    #[test]
    fn unknown_middleware_is_core_error() {
        let err = parse_middleware(Backend::Express, &["bogus".into()]).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn morgan_on_fastify_rejected_by_options_validate() {
        let mut args = new_args("my-api");
        args.backend = Some(BackendArg::Fastify);
        args.middleware = vec!["morgan".into()];
        let err = build_config("my-api", &args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }
}
