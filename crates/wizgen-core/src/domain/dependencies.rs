//! Dependency resolution: configuration → package/version mappings.
//!
//! Pure and total over valid configurations. The version table is read-only
//! process-wide data with no lifecycle; entries missing from it are
//! filtered out of the result rather than crashing the run.

use std::collections::BTreeMap;

use crate::domain::config::{Backend, Database, Frontend, Language, ProjectConfig};

/// Static version table covering every package wizgen can emit.
///
/// Kept sorted by rough category, not alphabetically, so related entries
/// stay together when versions get bumped.
const VERSIONS: &[(&str, &str)] = &[
    // backends
    ("express", "^4.18.2"),
    ("fastify", "^4.25.2"),
    // express middleware
    ("cors", "^2.8.5"),
    ("helmet", "^7.1.0"),
    ("morgan", "^1.10.0"),
    ("express-rate-limit", "^6.8.1"),
    // fastify middleware
    ("@fastify/helmet", "^11.0.0"),
    ("@fastify/cors", "^8.2.1"),
    ("@fastify/rate-limit", "^8.0.1"),
    // databases
    ("mongoose", "^8.0.3"),
    ("sequelize", "^6.37.1"),
    ("pg", "^8.11.3"),
    // auth
    ("jsonwebtoken", "^9.0.2"),
    ("bcryptjs", "^2.4.3"),
    // shared runtime
    ("dotenv", "^16.3.1"),
    // dev tooling
    ("nodemon", "^3.0.2"),
    ("typescript", "^5.2.2"),
    ("ts-node", "^10.9.1"),
    ("@types/node", "^20.12.0"),
    ("@types/express", "^4.17.21"),
    ("@types/fastify", "^4.25.7"),
    ("@types/pg", "^8.10.8"),
    ("@types/jsonwebtoken", "^9.0.5"),
    ("@types/bcryptjs", "^2.4.6"),
    // frontend
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
    ("vue", "^3.4.0"),
    ("vite", "^5.0.0"),
    ("@vitejs/plugin-react", "^4.2.1"),
    ("@vitejs/plugin-vue", "^5.0.4"),
];

/// Look up the pinned version range for a package, if the table knows it.
pub fn version_of(package: &str) -> Option<&'static str> {
    VERSIONS
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, version)| *version)
}

/// The resolver's output: everything the manifest template needs.
///
/// `BTreeMap` keeps key order deterministic, which in turn keeps the
/// rendered manifest byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
}

/// Resolve the full dependency set for a configuration.
pub fn resolve(config: &ProjectConfig) -> DependencySet {
    DependencySet {
        dependencies: runtime_dependencies(config),
        dev_dependencies: dev_dependencies(config),
        scripts: scripts(config),
    }
}

/// The narrower subset used by a frontend manifest: framework runtime plus
/// the matching build-tool plugin.
pub fn frontend_dependencies(frontend: Frontend) -> BTreeMap<String, String> {
    let mut deps = BTreeMap::new();
    for pkg in frontend.packages() {
        add(&mut deps, pkg);
    }
    add(&mut deps, "vite");
    add(&mut deps, frontend.vite_plugin());
    deps
}

fn runtime_dependencies(config: &ProjectConfig) -> BTreeMap<String, String> {
    let mut deps = BTreeMap::new();

    if let Some(backend) = config.shape.backend() {
        add(&mut deps, "dotenv");
        add(&mut deps, backend.backend.package());

        // Middleware is validated against the backend at construction;
        // by this point every entry is known to belong here.
        for mw in &backend.middleware {
            add(&mut deps, mw.package());
        }

        if let Some(db) = backend.database {
            for pkg in db.packages() {
                add(&mut deps, pkg);
            }
        }

        if backend.auth.is_some() {
            add(&mut deps, "jsonwebtoken");
            add(&mut deps, "bcryptjs");
        }
    } else if let Some(frontend) = config.shape.frontend() {
        for pkg in frontend.packages() {
            add(&mut deps, pkg);
        }
    }

    deps
}

fn dev_dependencies(config: &ProjectConfig) -> BTreeMap<String, String> {
    let mut deps = BTreeMap::new();
    add(&mut deps, "nodemon");

    if config.language == Language::TypeScript {
        add(&mut deps, "typescript");
        add(&mut deps, "ts-node");
        add(&mut deps, "@types/node");

        if let Some(backend) = config.shape.backend() {
            match backend.backend {
                Backend::Express => add(&mut deps, "@types/express"),
                Backend::Fastify => add(&mut deps, "@types/fastify"),
            }
            if backend.database == Some(Database::PostgreSql) {
                add(&mut deps, "@types/pg");
            }
            if backend.auth.is_some() {
                add(&mut deps, "@types/jsonwebtoken");
                add(&mut deps, "@types/bcryptjs");
            }
        }
    }

    deps
}

fn scripts(config: &ProjectConfig) -> BTreeMap<String, String> {
    let mut scripts = BTreeMap::new();
    scripts.insert("start".into(), "node src/server.js".into());
    scripts.insert("dev".into(), "nodemon src/server.js".into());

    if config.language == Language::TypeScript {
        scripts.insert("build".into(), "tsc".into());
        scripts.insert("start".into(), "node dist/server.js".into());
        scripts.insert("dev".into(), "nodemon src/server.ts".into());
        scripts.insert("start:prod".into(), "npm run build && npm start".into());
    }

    scripts
}

/// Insert `package` only when the version table has an entry for it.
fn add(map: &mut BTreeMap<String, String>, package: &str) {
    if let Some(version) = version_of(package) {
        map.insert(package.to_string(), version.to_string());
    }
}
