//! Git Flow initialization

use super::{GitService, ShellService};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// The fixed command sequence that produces the two-branch layout.
/// Order matters: the initial commit must exist before branches are renamed.
const GIT_FLOW_COMMANDS: [&str; 5] = [
    "git init",
    "git add .",
    "git commit -m \"chore: initial project setup\"",
    "git branch -m main",
    "git checkout -b develop",
];

/// `GitService` that delegates each command to a `ShellService`.
pub struct GitFlowService<S> {
    shell: S,
}

impl<S: ShellService> GitFlowService<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl<S: ShellService> GitService for GitFlowService<S> {
    async fn init_git_flow(&self, project_path: &Path) -> Result<()> {
        for command in GIT_FLOW_COMMANDS {
            self.shell.run(command, project_path).await?;
        }
        Ok(())
    }
}
