//! Environment and static file contents generated programmatically.

use crate::domain::config::{Database, ProjectConfig};

/// Entries ignored by git in every generated project.
pub const GITIGNORE: &str = "node_modules\n.env\ndist\ncoverage\n.DS_Store\n";

/// `.env` body for a project, or `None` for shapes without a backend.
pub fn env_content(config: &ProjectConfig) -> Option<String> {
    config.shape.backend()?;

    let mut lines = vec!["PORT=3000".to_string(), "NODE_ENV=development".to_string()];
    match config.shape.database() {
        Some(Database::MongoDb) => {
            lines.push("MONGO_URI=mongodb://localhost:27017/yourdbname".into());
        }
        Some(Database::PostgreSql) => {
            lines.push("PG_HOST=localhost".into());
            lines.push("PG_PORT=5432".into());
            lines.push("PG_USER=postgres".into());
            lines.push("PG_PASSWORD=postgres".into());
            lines.push("PG_DATABASE=yourdbname".into());
        }
        None => {}
    }
    Some(lines.join("\n") + "\n")
}

/// `.env.example`: the same keys with the values stripped.
pub fn env_example(env: &str) -> String {
    env.lines()
        .map(|line| match line.split_once('=') {
            Some((key, _)) => format!("{key}="),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{
        Backend, BackendOptions, Bundler, Frontend, Language, ProjectName, ProjectShape,
    };

    fn config_with(shape: ProjectShape) -> ProjectConfig {
        ProjectConfig {
            name: ProjectName::new("demo").unwrap(),
            language: Language::JavaScript,
            shape,
            bundler: Bundler::default(),
            git_init: false,
            install_deps: false,
        }
    }

    fn backend_shape(database: Option<Database>) -> ProjectShape {
        ProjectShape::BackendOnly(BackendOptions {
            backend: Backend::Express,
            database,
            middleware: vec![],
            auth: None,
        })
    }

    #[test]
    fn base_env_has_port_and_node_env() {
        let env = env_content(&config_with(backend_shape(None))).unwrap();
        assert_eq!(env, "PORT=3000\nNODE_ENV=development\n");
    }

    #[test]
    fn mongodb_adds_uri() {
        let env = env_content(&config_with(backend_shape(Some(Database::MongoDb)))).unwrap();
        assert!(env.contains("MONGO_URI=mongodb://localhost:27017/yourdbname"));
        assert!(!env.contains("PG_HOST"));
    }

    #[test]
    fn postgresql_adds_connection_block() {
        let env = env_content(&config_with(backend_shape(Some(Database::PostgreSql)))).unwrap();
        for key in ["PG_HOST=", "PG_PORT=5432", "PG_USER=", "PG_PASSWORD=", "PG_DATABASE="] {
            assert!(env.contains(key), "missing {key}");
        }
        assert!(!env.contains("MONGO_URI"));
    }

    #[test]
    fn frontend_only_has_no_env() {
        let config = config_with(ProjectShape::FrontendOnly {
            frontend: Frontend::React,
        });
        assert_eq!(env_content(&config), None);
    }

    #[test]
    fn example_strips_values() {
        let example = env_example("PORT=3000\nMONGO_URI=mongodb://localhost:27017/db\n");
        assert_eq!(example, "PORT=\nMONGO_URI=\n");
    }

    #[test]
    fn gitignore_is_the_fixed_five_entries() {
        let entries: Vec<&str> = GITIGNORE.lines().collect();
        assert_eq!(
            entries,
            vec!["node_modules", ".env", "dist", "coverage", ".DS_Store"]
        );
    }
}
