//! Filesystem materialization of a template set

use super::FileService;
use crate::creator::TemplateSet;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// `FileService` backed by `tokio::fs`.
pub struct TokioFileService;

#[async_trait]
impl FileService for TokioFileService {
    async fn create_project_structure(&self, base_path: &Path, files: &TemplateSet) -> Result<()> {
        fs::create_dir_all(base_path)
            .await
            .with_context(|| format!("Failed to create directory: {}", base_path.display()))?;

        for (file_path, content) in files {
            let target_path = base_path.join(file_path);
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            fs::write(&target_path, content)
                .await
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_set(entries: &[(&str, &str)]) -> TemplateSet {
        entries
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_writes_files_with_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("demo");

        let files = template_set(&[
            ("go.mod", "module demo\n"),
            ("cmd/api/main.go", "package main\n"),
            ("internal/domain/entity/entity.go", "package entity\n"),
        ]);

        TokioFileService
            .create_project_structure(&base, &files)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(base.join("go.mod")).unwrap(), "module demo\n");
        assert_eq!(
            std::fs::read_to_string(base.join("cmd/api/main.go")).unwrap(),
            "package main\n"
        );
        assert!(base.join("internal/domain/entity/entity.go").exists());
    }

    #[tokio::test]
    async fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_path_buf();

        std::fs::write(base.join("README.md"), "old").unwrap();

        let files = template_set(&[("README.md", "new\n")]);
        TokioFileService
            .create_project_structure(&base, &files)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(base.join("README.md")).unwrap(), "new\n");
    }

    #[tokio::test]
    async fn test_empty_set_still_creates_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("empty-project");

        TokioFileService
            .create_project_structure(&base, &TemplateSet::new())
            .await
            .unwrap();

        assert!(base.is_dir());
    }
}
