//! End-to-end pipeline tests against in-memory ports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use wizgen_core::application::ports::{Filesystem, ProcessRunner, StdioMode, TemplateSource};
use wizgen_core::application::ApplicationError;
use wizgen_core::domain::{
    AuthStrategy, Backend, BackendOptions, Bundler, Database, Frontend, Language, ProjectConfig,
    ProjectName, ProjectShape, TemplateNode, TemplateTree,
};
use wizgen_core::error::WizgenError;
use wizgen_core::prelude::GenerateService;

// ── fakes ────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn has_file(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(Path::new(path))
    }

    fn has_dir(&self, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(&PathBuf::from(path))
    }
}

#[async_trait]
impl Filesystem for MemoryFs {
    async fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, ApplicationError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            ApplicationError::filesystem(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            )
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Template source backed by a plain map of logical paths.
#[derive(Default)]
struct StaticTemplates {
    units: BTreeMap<String, TemplateTree>,
}

impl StaticTemplates {
    fn full() -> Self {
        let mut units = BTreeMap::new();
        units.insert(
            "shared/package.json".to_string(),
            TemplateTree::single(
                "package.json.tpl",
                "{\n  \"name\": \"{{PROJECT_NAME}}\",\n  \"scripts\": {{SCRIPTS_JSON}},\n  \"dependencies\": {{DEPENDENCIES_JSON}},\n  \"devDependencies\": {{DEV_DEPENDENCIES_JSON}}\n}\n",
            ),
        );
        units.insert(
            "express/server.js".to_string(),
            TemplateTree::single(
                "server.js.tpl",
                "const express = require('express');\n// wizgen:imports\n\nconst app = express();\n\n// wizgen:routes\n\napp.listen(process.env.PORT || 3000);\n",
            ),
        );
        units.insert(
            "shared/tsconfig.json".to_string(),
            TemplateTree::single("tsconfig.json.tpl", "{\n  \"compilerOptions\": {}\n}\n"),
        );
        units.insert(
            "shared/db/mongodb.js".to_string(),
            TemplateTree::single("db.js.tpl", "// mongodb connection for {{PROJECT_NAME}}\n"),
        );
        units.insert(
            "shared/models/mongodb/User.js".to_string(),
            TemplateTree::single("User.js.tpl", "// user model\n"),
        );
        units.insert(
            "auth/jwt/express/js".to_string(),
            TemplateTree::new(vec![TemplateNode::dir(
                "routes",
                vec![TemplateNode::file("auth.routes.js", "// auth routes\n")],
            )]),
        );
        units.insert(
            "frontend/react".to_string(),
            TemplateTree::new(vec![
                TemplateNode::file(
                    "package.json.tpl",
                    "{\n  \"name\": \"{{PROJECT_NAME}}\",\n  \"dependencies\": {{FRONTEND_DEPENDENCIES_JSON}}\n}\n",
                ),
                TemplateNode::dir(
                    "public",
                    vec![TemplateNode::file("index.html", "<!doctype html>\n")],
                ),
            ]),
        );
        Self { units }
    }
}

impl TemplateSource for StaticTemplates {
    fn unit(&self, logical_path: &str) -> Option<TemplateTree> {
        self.units.get(logical_path).cloned()
    }
}

#[derive(Default)]
struct RecordingProcess {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ProcessRunner for RecordingProcess {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        _cwd: &Path,
        _stdio: StdioMode,
    ) -> Result<(), ApplicationError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{program} {}", args.join(" ")));
        Ok(())
    }
}

/// Process runner where every command fails, for the best-effort paths.
#[derive(Default)]
struct BrokenProcess;

#[async_trait]
impl ProcessRunner for BrokenProcess {
    async fn run(
        &self,
        program: &str,
        _args: &[&str],
        _cwd: &Path,
        _stdio: StdioMode,
    ) -> Result<(), ApplicationError> {
        Err(ApplicationError::process(program, "command not found"))
    }
}

// ── config helpers ───────────────────────────────────────────────────────────

fn config(shape: ProjectShape) -> ProjectConfig {
    ProjectConfig {
        name: ProjectName::new("demo").unwrap(),
        language: Language::JavaScript,
        shape,
        bundler: Bundler::default(),
        git_init: false,
        install_deps: false,
    }
}

fn express(database: Option<Database>, auth: Option<AuthStrategy>) -> ProjectShape {
    ProjectShape::BackendOnly(BackendOptions {
        backend: Backend::Express,
        database,
        middleware: vec![],
        auth,
    })
}

fn service() -> GenerateService<StaticTemplates, MemoryFs, RecordingProcess> {
    GenerateService::new(
        StaticTemplates::full(),
        MemoryFs::default(),
        RecordingProcess::default(),
    )
}

async fn run(
    svc: &GenerateService<StaticTemplates, MemoryFs, RecordingProcess>,
    cfg: &ProjectConfig,
) {
    svc.generate(cfg, Path::new("/p")).await.unwrap();
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bare_express_javascript_project() {
    let svc = service();
    let cfg = config(express(None, None));
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    assert!(fs.has_file("/p/.env"));
    assert!(fs.has_file("/p/.env.example"));
    assert_eq!(
        fs.file("/p/.gitignore").unwrap(),
        "node_modules\n.env\ndist\ncoverage\n.DS_Store\n"
    );

    let manifest = fs.file("/p/package.json").unwrap();
    assert!(manifest.contains("\"name\": \"demo\""));
    assert!(manifest.contains("\"express\""));
    assert!(!manifest.contains("mongoose"));
    assert!(!manifest.contains("sequelize"));

    assert!(fs.has_file("/p/src/server.js"));
    assert!(fs.has_dir("/p/src/routes"));
    assert!(!fs.has_dir("/p/client"));
}

#[tokio::test]
async fn mongodb_selection_adds_data_layer() {
    let svc = service();
    let cfg = config(express(Some(Database::MongoDb), None));
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    assert!(fs.has_file("/p/src/config/db.js"));
    assert!(fs.has_file("/p/src/models/User.js"));
    assert!(fs.file("/p/.env").unwrap().contains("MONGO_URI="));
    assert!(fs.file("/p/package.json").unwrap().contains("mongoose"));
}

#[tokio::test]
async fn auth_integration_is_idempotent_across_reruns() {
    let svc = service();
    let cfg = config(express(None, Some(AuthStrategy::Jwt)));
    run(&svc, &cfg).await;
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    let server = fs.file("/p/src/server.js").unwrap();
    assert_eq!(server.matches("authRoutes = require").count(), 1);
    assert_eq!(server.matches("app.use('/api/auth'").count(), 1);
    assert!(fs.has_file("/p/src/routes/auth.routes.js"));
}

#[tokio::test]
async fn frontend_only_react_project() {
    let svc = service();
    let cfg = config(ProjectShape::FrontendOnly {
        frontend: Frontend::React,
    });
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    assert!(!fs.has_file("/p/.env"));
    let manifest = fs.file("/p/package.json").unwrap();
    assert!(manifest.contains("\"react\""));
    assert!(manifest.contains("\"react-dom\""));
    assert!(manifest.contains("@vitejs/plugin-react"));
    assert!(fs.has_file("/p/public/index.html"));
    assert!(!fs.has_dir("/p/client"));
}

#[tokio::test]
async fn fullstack_renders_frontend_under_client() {
    let svc = service();
    let cfg = config(ProjectShape::Fullstack {
        backend: BackendOptions {
            backend: Backend::Express,
            database: None,
            middleware: vec![],
            auth: None,
        },
        frontend: Frontend::React,
    });
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    assert!(fs.has_file("/p/src/server.js"));
    assert!(fs.has_file("/p/client/package.json"));
    assert!(fs.has_file("/p/client/public/index.html"));
    // The root manifest stays the backend one.
    assert!(fs.file("/p/package.json").unwrap().contains("express"));
}

#[tokio::test]
async fn missing_required_template_aborts_the_generate_task() {
    let svc = GenerateService::new(
        StaticTemplates::default(),
        MemoryFs::default(),
        RecordingProcess::default(),
    );
    let cfg = config(express(None, None));
    let err = svc.generate(&cfg, Path::new("/p")).await.unwrap_err();
    match err {
        WizgenError::TaskFailed { task, .. } => assert_eq!(task, "generate"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn git_and_npm_tasks_run_when_enabled() {
    let svc = service();
    let mut cfg = config(express(None, None));
    cfg.git_init = true;
    cfg.install_deps = true;
    run(&svc, &cfg).await;

    let calls = svc.process().calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["git init", "npm install --quiet"]);
}

#[tokio::test]
async fn failing_git_and_npm_do_not_fail_the_run() {
    let svc = GenerateService::new(StaticTemplates::full(), MemoryFs::default(), BrokenProcess);
    let mut cfg = config(express(None, None));
    cfg.git_init = true;
    cfg.install_deps = true;

    svc.generate(&cfg, Path::new("/p")).await.unwrap();

    let fs = svc.filesystem();
    assert!(fs.has_file("/p/package.json"));
    assert!(fs.has_file("/p/src/server.js"));
}

#[tokio::test]
async fn typescript_frontend_only_still_gets_tsconfig() {
    let svc = service();
    let mut cfg = config(ProjectShape::FrontendOnly {
        frontend: Frontend::React,
    });
    cfg.language = Language::TypeScript;
    run(&svc, &cfg).await;
    let fs = svc.filesystem();

    assert!(fs.has_file("/p/tsconfig.json"));
    assert!(fs.has_file("/p/package.json"));
}
