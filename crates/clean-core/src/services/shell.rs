//! Shell command execution

use super::ShellService;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// A shell command exited with a non-zero status.
#[derive(Debug, Error)]
#[error("Command `{command}` failed with {status}{detail}", detail = render_stderr(.stderr))]
pub struct CommandError {
    pub command: String,
    pub status: std::process::ExitStatus,
    pub stderr: String,
}

fn render_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

/// `ShellService` that runs commands through `sh -c`.
pub struct SystemShellService;

#[async_trait]
impl ShellService for SystemShellService {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("Failed to spawn `{}`", command))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CommandError {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        SystemShellService.run("true", dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_command_runs_in_cwd() {
        let dir = tempfile::tempdir().unwrap();
        SystemShellService
            .run("touch marker.txt", dir.path())
            .await
            .unwrap();
        assert!(dir.path().join("marker.txt").exists());
    }

    #[tokio::test]
    async fn test_failing_command_surfaces_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemShellService
            .run("echo boom >&2; exit 3", dir.path())
            .await
            .unwrap_err();

        let cmd_err = err.downcast_ref::<CommandError>().expect("CommandError");
        assert_eq!(cmd_err.status.code(), Some(3));
        assert!(cmd_err.stderr.contains("boom"));
    }
}
