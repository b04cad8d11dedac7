//! Collaborator ports for the creation workflow
//!
//! The workflow only ever talks to these four narrow interfaces; the
//! tokio-backed implementations live alongside them. Keeping the seams as
//! traits is what makes the workflow testable with recording fakes.

pub mod fs;
pub mod git;
pub mod shell;

use crate::creator::TemplateSet;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub use fs::TokioFileService;
pub use git::GitFlowService;
pub use shell::{CommandError, SystemShellService};

/// Writes a template set under a base directory.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Create any missing intermediate directories and write every file,
    /// overwriting existing files at the same path. Fails fast; no rollback
    /// of partially written files.
    async fn create_project_structure(&self, base_path: &Path, files: &TemplateSet) -> Result<()>;
}

/// Runs one shell command in a working directory.
#[async_trait]
pub trait ShellService: Send + Sync {
    /// Execute `command` with `cwd` as the working directory, awaiting
    /// completion. A non-zero exit surfaces the underlying error unchanged.
    async fn run(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// Initializes the two-branch (`main`/`develop`) git history.
#[async_trait]
pub trait GitService: Send + Sync {
    async fn init_git_flow(&self, project_path: &Path) -> Result<()>;
}

/// Receives start/stop progress notifications with human-readable labels.
/// Fire-and-forget; never blocks the workflow.
pub trait ProgressReporter {
    fn start(&self, label: &str);
    fn stop(&self, label: &str);
}

/// Reporter that swallows all events. For non-interactive callers and tests.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn start(&self, _label: &str) {}
    fn stop(&self, _label: &str) {}
}
