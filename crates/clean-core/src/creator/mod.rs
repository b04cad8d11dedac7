//! Project creators - the closed set of scaffolding archetypes
//!
//! Each archetype is one `Creator` record: a (kind, stack) pair, the shell
//! command that installs its dependencies, the "next steps" hint shown after
//! creation, and a pure function producing its template files. The set is
//! closed and small, so creators are plain records with a function pointer
//! rather than an open trait hierarchy.

pub mod go_api;
pub mod go_mcp;
pub mod nestjs_api;
pub mod nestjs_mcp;
pub mod registry;

use crate::config::ProjectConfig;
use std::collections::BTreeMap;

pub use registry::CreatorRegistry;

/// Relative path -> literal file content, as produced by a template function.
/// A `BTreeMap` keeps materialization order deterministic.
pub type TemplateSet = BTreeMap<String, String>;

/// Template-producing function of one archetype. Must be pure, deterministic,
/// and total for any valid config; called exactly once per creation run.
pub type TemplateFn = fn(&ProjectConfig) -> TemplateSet;

/// A named, stateless scaffolding capability. Exactly one instance exists per
/// (kind, stack) pair; instances are immutable after registration.
#[derive(Debug, Clone, Copy)]
pub struct Creator {
    /// Coarse project category (e.g. "microservice", "mcp")
    pub kind: &'static str,

    /// Implementation flavor (e.g. "go", "nestjs")
    pub stack: &'static str,

    /// Single shell command that installs dependencies for this stack
    pub install_command: &'static str,

    /// Hint shown to the user after successful creation; opaque to the core
    pub next_steps: &'static str,

    /// Template generator for this archetype
    pub templates: TemplateFn,
}

impl Creator {
    /// Composite registry key, unique across all registered creators
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.stack)
    }

    /// Produce the template files for the given config
    pub fn render_templates(&self, config: &ProjectConfig) -> TemplateSet {
        (self.templates)(config)
    }
}

/// Replace the placeholder tokens template bodies are written with.
/// The only substitution the tool performs; no template engine.
fn render(template: &str, config: &ProjectConfig) -> String {
    template
        .replace("{{name}}", &config.name)
        .replace("{{description}}", &config.description)
}

/// Go module path for a generated project. The prefix is overridable through
/// `CLEAN_APP_MODULE_PREFIX` so generated modules can live under any org.
fn go_module_name(config: &ProjectConfig) -> String {
    let prefix = std::env::var("CLEAN_APP_MODULE_PREFIX")
        .unwrap_or_else(|_| "github.com/carlos".to_string());
    format!("{}/{}", prefix.trim_end_matches('/'), config.name)
}
