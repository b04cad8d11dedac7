//! The end-to-end creation pipeline

use crate::config::{ProjectConfig, FEATURE_GITFLOW};
use crate::creator::Creator;
use crate::services::{FileService, GitService, ProgressReporter, ShellService};
use anyhow::Result;

/// Drives one project-creation run: materialize the creator's templates,
/// install dependencies, and (when the `gitflow` feature is selected)
/// initialize the two-branch git history.
///
/// Steps run strictly in that order, each awaited to completion before the
/// next begins - git init needs the files on disk, and dependency
/// installation may need materialized manifest files. Any collaborator
/// failure propagates unchanged and aborts the remaining steps.
pub struct CreateProject<F, S, G> {
    files: F,
    shell: S,
    git: G,
}

impl<F, S, G> CreateProject<F, S, G>
where
    F: FileService,
    S: ShellService,
    G: GitService,
{
    pub fn new(files: F, shell: S, git: G) -> Self {
        Self { files, shell, git }
    }

    /// Run the pipeline. Returns the creator's next-steps hint verbatim on
    /// full success of every executed step.
    pub async fn execute(
        &self,
        creator: &Creator,
        config: &ProjectConfig,
        progress: &dyn ProgressReporter,
    ) -> Result<String> {
        let project_path = std::env::current_dir()?.join(&config.name);

        progress.start("Creating project structure...");
        let templates = creator.render_templates(config);
        self.files
            .create_project_structure(&project_path, &templates)
            .await?;
        progress.stop("Project structure created");

        progress.start("Installing dependencies...");
        self.shell
            .run(creator.install_command, &project_path)
            .await?;
        progress.stop("Dependencies installed");

        if config.has_feature(FEATURE_GITFLOW) {
            progress.start("Initializing Git Flow...");
            self.git.init_git_flow(&project_path).await?;
            progress.stop("Git Flow initialized");
        }

        Ok(creator.next_steps.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::TemplateSet;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// Shared call log; every fake pushes a labelled event so tests can
    /// assert cross-collaborator ordering.
    type Log = Arc<Mutex<Vec<String>>>;

    struct FakeFiles {
        log: Log,
        seen: Mutex<Option<(PathBuf, TemplateSet)>>,
        fail: bool,
    }

    #[async_trait]
    impl FileService for FakeFiles {
        async fn create_project_structure(
            &self,
            base_path: &Path,
            files: &TemplateSet,
        ) -> Result<()> {
            self.log.lock().unwrap().push("materialize".to_string());
            *self.seen.lock().unwrap() = Some((base_path.to_path_buf(), files.clone()));
            if self.fail {
                bail!("disk full");
            }
            Ok(())
        }
    }

    struct FakeShell {
        log: Log,
        seen: Mutex<Option<(String, PathBuf)>>,
        fail: bool,
    }

    #[async_trait]
    impl ShellService for FakeShell {
        async fn run(&self, command: &str, cwd: &Path) -> Result<()> {
            self.log.lock().unwrap().push("install".to_string());
            *self.seen.lock().unwrap() = Some((command.to_string(), cwd.to_path_buf()));
            if self.fail {
                bail!("npm not found");
            }
            Ok(())
        }
    }

    struct FakeGit {
        log: Log,
        seen: Mutex<Option<PathBuf>>,
    }

    #[async_trait]
    impl GitService for FakeGit {
        async fn init_git_flow(&self, project_path: &Path) -> Result<()> {
            self.log.lock().unwrap().push("git-init".to_string());
            *self.seen.lock().unwrap() = Some(project_path.to_path_buf());
            Ok(())
        }
    }

    struct LoggingReporter {
        log: Log,
    }

    impl ProgressReporter for LoggingReporter {
        fn start(&self, label: &str) {
            self.log.lock().unwrap().push(format!("start:{}", label));
        }
        fn stop(&self, label: &str) {
            self.log.lock().unwrap().push(format!("stop:{}", label));
        }
    }

    struct Harness {
        log: Log,
        workflow: CreateProject<FakeFiles, FakeShell, FakeGit>,
        reporter: LoggingReporter,
    }

    fn harness(fail_files: bool, fail_shell: bool) -> Harness {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        Harness {
            log: log.clone(),
            workflow: CreateProject::new(
                FakeFiles {
                    log: log.clone(),
                    seen: Mutex::new(None),
                    fail: fail_files,
                },
                FakeShell {
                    log: log.clone(),
                    seen: Mutex::new(None),
                    fail: fail_shell,
                },
                FakeGit {
                    log: log.clone(),
                    seen: Mutex::new(None),
                },
            ),
            reporter: LoggingReporter { log },
        }
    }

    fn demo_templates(_: &ProjectConfig) -> TemplateSet {
        TemplateSet::from([("main.go".to_string(), "package main".to_string())])
    }

    fn go_creator() -> Creator {
        Creator {
            kind: "microservice",
            stack: "go",
            install_command: "go mod tidy",
            next_steps: "make run",
            templates: demo_templates,
        }
    }

    fn demo_config(features: &[&str]) -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            description: String::new(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_materializes_templates_under_project_path() {
        let h = harness(false, false);

        h.workflow
            .execute(&go_creator(), &demo_config(&[]), &h.reporter)
            .await
            .unwrap();

        let seen = h.workflow.files.seen.lock().unwrap();
        let (path, files) = seen.as_ref().unwrap();
        assert!(path.ends_with("demo"));
        assert_eq!(files, &demo_templates(&demo_config(&[])));
    }

    #[tokio::test]
    async fn test_installs_dependencies_in_project_path() {
        let h = harness(false, false);

        h.workflow
            .execute(&go_creator(), &demo_config(&[]), &h.reporter)
            .await
            .unwrap();

        let seen = h.workflow.shell.seen.lock().unwrap();
        let (command, cwd) = seen.as_ref().unwrap();
        assert_eq!(command, "go mod tidy");
        assert!(cwd.ends_with("demo"));
    }

    #[tokio::test]
    async fn test_resolves_to_next_steps_verbatim() {
        let h = harness(false, false);

        let next = h
            .workflow
            .execute(&go_creator(), &demo_config(&[]), &h.reporter)
            .await
            .unwrap();

        assert_eq!(next, "make run");
    }

    #[tokio::test]
    async fn test_git_flow_skipped_without_feature() {
        let h = harness(false, false);

        h.workflow
            .execute(&go_creator(), &demo_config(&["docker"]), &h.reporter)
            .await
            .unwrap();

        assert!(h.workflow.git.seen.lock().unwrap().is_none());
        let log = h.log.lock().unwrap();
        assert!(!log.iter().any(|e| e.contains("Git Flow")));
    }

    #[tokio::test]
    async fn test_git_flow_runs_once_with_project_path() {
        let h = harness(false, false);

        h.workflow
            .execute(&go_creator(), &demo_config(&["gitflow"]), &h.reporter)
            .await
            .unwrap();

        let seen = h.workflow.git.seen.lock().unwrap();
        assert!(seen.as_ref().unwrap().ends_with("demo"));

        let log = h.log.lock().unwrap();
        assert_eq!(log.iter().filter(|e| *e == "git-init").count(), 1);
    }

    #[tokio::test]
    async fn test_steps_run_in_fixed_order_with_paired_progress() {
        let h = harness(false, false);

        h.workflow
            .execute(&go_creator(), &demo_config(&["gitflow"]), &h.reporter)
            .await
            .unwrap();

        let log = h.log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                "start:Creating project structure...",
                "materialize",
                "stop:Project structure created",
                "start:Installing dependencies...",
                "install",
                "stop:Dependencies installed",
                "start:Initializing Git Flow...",
                "git-init",
                "stop:Git Flow initialized",
            ]
        );
    }

    #[tokio::test]
    async fn test_materialization_failure_aborts_before_install() {
        let h = harness(true, false);

        let err = h
            .workflow
            .execute(&go_creator(), &demo_config(&["gitflow"]), &h.reporter)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");

        let log = h.log.lock().unwrap();
        assert!(!log.contains(&"install".to_string()));
        assert!(!log.contains(&"git-init".to_string()));
    }

    #[tokio::test]
    async fn test_install_failure_short_circuits_git_init() {
        let h = harness(false, true);

        let err = h
            .workflow
            .execute(&go_creator(), &demo_config(&["gitflow"]), &h.reporter)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "npm not found");

        // Git Flow requested but never reached; no git progress events fired.
        let log = h.log.lock().unwrap();
        assert!(log.contains(&"materialize".to_string()));
        assert!(!log.contains(&"git-init".to_string()));
        assert!(!log.iter().any(|e| e.contains("Git Flow")));
    }
}
