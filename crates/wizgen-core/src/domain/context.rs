//! Render context: the substitution map applied to templated files.

use std::collections::BTreeMap;

use crate::domain::config::ProjectConfig;
use crate::domain::dependencies::{self, DependencySet};

/// Immutable `{{VARIABLE}}` substitution map.
///
/// Assembled once per run from the configuration and the resolved
/// dependency set, then shared read-only by every render. Placeholders
/// with no entry render as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full context for one generation run.
    pub fn for_project(config: &ProjectConfig, deps: &DependencySet) -> Self {
        let mut ctx = Self::new();
        ctx.set("PROJECT_NAME", config.name.as_str());
        ctx.set("LANGUAGE", config.language.as_str());
        ctx.set("EXT", config.file_extension());
        ctx.set("BUNDLER", config.bundler.as_str());

        if let Some(db) = config.shape.database() {
            ctx.set("DATABASE", db.as_str());
        }

        ctx.set("SCRIPTS_JSON", json_object(&deps.scripts));
        ctx.set("DEPENDENCIES_JSON", json_object(&deps.dependencies));
        ctx.set(
            "DEV_DEPENDENCIES_JSON",
            json_object(&deps.dev_dependencies),
        );

        if let Some(frontend) = config.shape.frontend() {
            ctx.set("FRONTEND", frontend.as_str());
            ctx.set(
                "FRONTEND_DEPENDENCIES_JSON",
                json_object(&dependencies::frontend_dependencies(frontend)),
            );
        }

        ctx
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every known `{{KEY}}` occurrence in `source`.
    pub fn render(&self, source: &str) -> String {
        let mut out = source.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            if out.contains(&placeholder) {
                out = out.replace(&placeholder, value);
            }
        }
        out
    }
}

/// Render a string map as a pretty-printed JSON object.
///
/// `BTreeMap` iteration order makes the output deterministic.
fn json_object(map: &BTreeMap<String, String>) -> String {
    // Serializing a string map cannot fail.
    serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{
        Backend, BackendOptions, Bundler, Database, Language, ProjectName, ProjectShape,
    };

    fn sample_config() -> ProjectConfig {
        ProjectConfig {
            name: ProjectName::new("demo-api").unwrap(),
            language: Language::JavaScript,
            shape: ProjectShape::BackendOnly(BackendOptions {
                backend: Backend::Express,
                database: Some(Database::MongoDb),
                middleware: vec![],
                auth: None,
            }),
            bundler: Bundler::default(),
            git_init: false,
            install_deps: false,
        }
    }

    #[test]
    fn substitutes_known_placeholders() {
        let mut ctx = RenderContext::new();
        ctx.set("PROJECT_NAME", "demo");
        assert_eq!(ctx.render("name: {{PROJECT_NAME}}!"), "name: demo!");
    }

    #[test]
    fn unknown_placeholders_render_verbatim() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("{{NOT_A_VAR}}"), "{{NOT_A_VAR}}");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let mut ctx = RenderContext::new();
        ctx.set("EXT", "js");
        assert_eq!(ctx.render("a.{{EXT}} b.{{EXT}}"), "a.js b.js");
    }

    #[test]
    fn project_context_carries_config_and_deps() {
        let config = sample_config();
        let deps = dependencies::resolve(&config);
        let ctx = RenderContext::for_project(&config, &deps);

        assert_eq!(ctx.get("PROJECT_NAME"), Some("demo-api"));
        assert_eq!(ctx.get("EXT"), Some("js"));
        assert_eq!(ctx.get("DATABASE"), Some("mongodb"));
        assert!(ctx.get("DEPENDENCIES_JSON").unwrap().contains("mongoose"));
        assert!(ctx.get("SCRIPTS_JSON").unwrap().contains("nodemon"));
        // backend-only shape has no frontend variables
        assert_eq!(ctx.get("FRONTEND"), None);
    }

    #[test]
    fn json_blocks_are_valid_json() {
        let config = sample_config();
        let deps = dependencies::resolve(&config);
        let ctx = RenderContext::for_project(&config, &deps);
        let parsed: serde_json::Value =
            serde_json::from_str(ctx.get("DEPENDENCIES_JSON").unwrap()).unwrap();
        assert!(parsed.is_object());
    }
}
