//! Generation orchestrator: drives one project-creation run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, ProcessRunner, StdioMode, TemplateSource};
use crate::application::services::render::render_tree;
use crate::domain::config::{Backend, Language, ProjectConfig};
use crate::domain::context::RenderContext;
use crate::domain::dependencies;
use crate::domain::envfile;
use crate::domain::patch::{self, Insertion};
use crate::error::{WizgenError, WizgenResult};

/// The use case behind `wizgen new`.
///
/// Holds the three ports a run needs; the configuration and target arrive
/// per call so one service can serve many runs.
pub struct GenerateService<S, F, P> {
    source: S,
    fs: F,
    process: P,
}

impl<S, F, P> GenerateService<S, F, P>
where
    S: TemplateSource,
    F: Filesystem,
    P: ProcessRunner,
{
    pub fn new(source: S, fs: F, process: P) -> Self {
        Self {
            source,
            fs,
            process,
        }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn process(&self) -> &P {
        &self.process
    }

    /// Run the full pipeline for `config`, writing under `target`.
    ///
    /// Tasks run in order; a failure in any non-best-effort task aborts the
    /// run (no rollback, the partial tree stays). The trailing git and npm
    /// tasks only log on failure.
    #[instrument(skip_all, fields(project = %config.name))]
    pub async fn generate(&self, config: &ProjectConfig, target: &Path) -> WizgenResult<()> {
        info!("starting generation");

        config
            .validate()
            .map_err(|e| WizgenError::task("validate", e))?;

        self.scaffold(config, target)
            .await
            .map_err(|e| WizgenError::task("scaffold", e))?;

        let deps = dependencies::resolve(config);
        let ctx = RenderContext::for_project(config, &deps);

        self.generate_sources(config, target, &ctx)
            .await
            .map_err(|e| WizgenError::task("generate", e))?;

        self.render_frontend(config, target, &ctx)
            .await
            .map_err(|e| WizgenError::task("frontend", e))?;

        if config.git_init {
            if let Err(e) = self
                .process
                .run("git", &["init"], target, StdioMode::Captured)
                .await
            {
                warn!(error = %e, "git init failed, continuing without a repository");
            }
        }

        if config.install_deps {
            if let Err(e) = self
                .process
                .run("npm", &["install", "--quiet"], target, StdioMode::Inherited)
                .await
            {
                warn!(error = %e, "npm install failed, install dependencies manually");
            }
        }

        info!("generation complete");
        Ok(())
    }

    /// Create the directory skeleton. All creations are idempotent.
    async fn scaffold(&self, config: &ProjectConfig, target: &Path) -> Result<(), ApplicationError> {
        self.fs.create_dir_all(target).await?;
        for dir in scaffold_dirs(config) {
            self.fs.create_dir_all(&target.join(dir)).await?;
        }
        Ok(())
    }

    /// The main fan-out plus its sequential tail.
    ///
    /// The five leading writes touch disjoint paths, so they run
    /// concurrently and fail fast as a group. Database, middleware and auth
    /// follow sequentially because auth patches the server file the fan-out
    /// produced.
    async fn generate_sources(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let gitignore = target.join(".gitignore");
        tokio::try_join!(
            self.render_manifest(config, target, ctx),
            self.write_env(config, target),
            self.render_server(config, target, ctx),
            self.render_tsconfig(config, target, ctx),
            self.fs.write(&gitignore, envfile::GITIGNORE),
        )?;

        self.render_database(config, target, ctx).await?;
        self.render_middleware(config, target, ctx).await?;
        self.integrate_auth(config, target, ctx).await?;
        Ok(())
    }

    /// Root manifest for shapes with a backend. Frontend-only projects get
    /// their manifest from the frontend tree instead.
    async fn render_manifest(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        if config.shape.backend().is_none() {
            return Ok(());
        }
        self.render_required("shared/package.json", target, ctx).await
    }

    async fn write_env(
        &self,
        config: &ProjectConfig,
        target: &Path,
    ) -> Result<(), ApplicationError> {
        let Some(env) = envfile::env_content(config) else {
            return Ok(());
        };
        self.fs.write(&target.join(".env"), &env).await?;
        self.fs
            .write(&target.join(".env.example"), &envfile::env_example(&env))
            .await
    }

    async fn render_server(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let Some(backend) = config.shape.backend() else {
            return Ok(());
        };
        let unit = format!(
            "{}/server.{}",
            backend.backend.as_str(),
            config.file_extension()
        );
        self.render_required(&unit, &target.join("src"), ctx).await
    }

    async fn render_tsconfig(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        if config.language != Language::TypeScript {
            return Ok(());
        }
        self.render_required("shared/tsconfig.json", target, ctx).await
    }

    async fn render_database(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let Some(db) = config.shape.database() else {
            return Ok(());
        };
        let ext = config.file_extension();
        self.render_required(
            &format!("shared/db/{}.{ext}", db.as_str()),
            &target.join("src/config"),
            ctx,
        )
        .await?;
        self.render_required(
            &format!("shared/models/{}/User.{ext}", db.as_str()),
            &target.join("src/models"),
            ctx,
        )
        .await
    }

    async fn render_middleware(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let Some(backend) = config.shape.backend() else {
            return Ok(());
        };
        let ext = config.file_extension();
        for mw in &backend.middleware {
            let unit = format!(
                "middleware/{}/{}.{ext}",
                backend.backend.as_str(),
                mw.file_stem()
            );
            // Middleware files are optional units; an absent one is skipped.
            self.render_optional(&unit, &target.join("src/middlewares"), ctx)
                .await?;
        }
        Ok(())
    }

    /// Render the auth subtree and wire it into the generated server.
    async fn integrate_auth(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let Some(backend) = config.shape.backend() else {
            return Ok(());
        };
        if backend.auth.is_none() {
            return Ok(());
        }

        let unit = format!(
            "auth/jwt/{}/{}",
            backend.backend.as_str(),
            config.file_extension()
        );
        self.render_required(&unit, &target.join("src"), ctx).await?;

        let server = target
            .join("src")
            .join(format!("server.{}", config.file_extension()));
        if !self.fs.exists(&server).await {
            return Err(ApplicationError::PatchTargetMissing { path: server });
        }

        let content = self.fs.read_to_string(&server).await?;
        let patched =
            patch::apply_insertions(&content, &auth_insertions(config.language, backend.backend));
        if patched != content {
            self.fs.write(&server, &patched).await?;
        }
        Ok(())
    }

    async fn render_frontend(
        &self,
        config: &ProjectConfig,
        target: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let Some(frontend) = config.shape.frontend() else {
            return Ok(());
        };
        // Frontend root: the project root when there is no backend,
        // client/ alongside the backend otherwise.
        let root = if config.shape.is_fullstack() {
            target.join("client")
        } else {
            target.to_path_buf()
        };
        self.render_optional(&format!("frontend/{}", frontend.as_str()), &root, ctx)
            .await
    }

    async fn render_required(
        &self,
        unit: &str,
        into: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        let tree = self
            .source
            .unit(unit)
            .ok_or_else(|| ApplicationError::MissingTemplate { unit: unit.into() })?;
        render_tree(&self.fs, &tree, into, ctx).await
    }

    async fn render_optional(
        &self,
        unit: &str,
        into: &Path,
        ctx: &RenderContext,
    ) -> Result<(), ApplicationError> {
        match self.source.unit(unit) {
            Some(tree) => render_tree(&self.fs, &tree, into, ctx).await,
            None => {
                debug!(unit, "optional template unit absent, skipping");
                Ok(())
            }
        }
    }
}

/// Relative directories the scaffold task creates for `config`.
pub fn scaffold_dirs(config: &ProjectConfig) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if config.shape.backend().is_some() {
        dirs.push(PathBuf::from("src"));
        dirs.push(PathBuf::from("src/config"));
        dirs.push(PathBuf::from("src/routes"));
        dirs.push(PathBuf::from("src/middlewares"));
        if config.language == Language::TypeScript {
            dirs.push(PathBuf::from("types"));
        }
    }
    if config.shape.is_fullstack() {
        dirs.push(PathBuf::from("client"));
    }
    if config.shape.is_frontend_only() {
        dirs.push(PathBuf::from("public"));
    }
    dirs
}

/// Names of the tasks that would run for `config`, in execution order.
pub fn plan(config: &ProjectConfig) -> Vec<&'static str> {
    let mut tasks = vec!["validate", "scaffold", "generate"];
    if config.shape.frontend().is_some() {
        tasks.push("frontend");
    }
    if config.git_init {
        tasks.push("git-init");
    }
    if config.install_deps {
        tasks.push("install-deps");
    }
    tasks
}

/// Command hints printed after a successful run.
///
/// Branches on the project shape and language: fullstack projects get a
/// second install and dev command for `client/`, TypeScript backends build
/// before they start, everything else runs the dev script.
pub fn next_steps(config: &ProjectConfig) -> Vec<String> {
    let mut steps = vec![format!("cd {}", config.name)];
    if !config.install_deps {
        steps.push("npm install".into());
        if config.shape.is_fullstack() {
            steps.push("cd client && npm install".into());
        }
    }
    if config.shape.backend().is_some() && config.language == Language::TypeScript {
        steps.push("npm run build".into());
        steps.push("npm start".into());
    } else {
        steps.push("npm run dev".into());
    }
    if config.shape.is_fullstack() {
        steps.push("cd client && npm run dev".into());
    }
    if config.shape.database().is_some() {
        steps.push("Update .env with your database credentials".into());
    }
    steps
}

/// The marker-guarded insertions that wire JWT auth into a server file.
fn auth_insertions(language: Language, backend: Backend) -> Vec<Insertion> {
    let import = match language {
        Language::JavaScript => "const authRoutes = require('./routes/auth.routes');",
        Language::TypeScript => "import authRoutes from './routes/auth.routes';",
    };
    let route = match backend {
        Backend::Express => "app.use('/api/auth', authRoutes);",
        Backend::Fastify => "fastify.register(authRoutes, { prefix: '/api/auth' });",
    };
    vec![
        Insertion::after(patch::IMPORTS_SLOT, import, "authRoutes"),
        Insertion::after(patch::ROUTES_SLOT, route, "/api/auth"),
    ]
}
