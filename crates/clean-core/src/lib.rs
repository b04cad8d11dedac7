//! Clean Core - Shared library for Clean Architecture project scaffolding
//!
//! This library provides the core functionality for scaffolding projects from
//! a fixed set of archetypes (HTTP microservice or MCP tool server, each in a
//! Go or NestJS flavor). It is designed to be driven by a CLI binary
//! (e.g. `create-clean-app`) but is usable by any caller that can supply the
//! collaborator services.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Creators** - The closed registry of archetypes and their
//!   template-producing functions
//! - **Layer 2: Services** - Narrow collaborator ports (filesystem, shell,
//!   git, progress) plus their tokio-backed implementations
//! - **Layer 3: Workflow** - `CreateProject`, the sequential creation pipeline
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use clean_core::{CreatorRegistry, ProjectConfig, workflow::CreateProject};
//!
//! let registry = CreatorRegistry::new();
//! let creator = registry.get("microservice", "go").expect("known archetype");
//!
//! let config = ProjectConfig {
//!     name: "demo".into(),
//!     description: "".into(),
//!     features: vec![],
//! };
//!
//! let workflow = CreateProject::new(files, shell, git);
//! let next_steps = workflow.execute(creator, &config, &progress).await?;
//! ```

pub mod config;
pub mod creator;
pub mod services;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ProjectConfig, FEATURE_GITFLOW};
pub use creator::{Creator, CreatorRegistry, TemplateSet};
pub use services::{FileService, GitService, ProgressReporter, ShellService};
pub use workflow::CreateProject;

#[cfg(feature = "tui")]
pub use tui::run;
