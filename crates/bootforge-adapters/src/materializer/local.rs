//! Materializer backed by a templates directory on disk.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use bootforge_core::application::{ApplicationError, ports::FileMaterializer};
use bootforge_core::domain::Project;
use bootforge_core::error::ForgeResult;

/// Materializer reading template bodies from a user-supplied directory.
///
/// Layout mirrors the embedded catalog: `<root>/<source_dir>/<filename>`.
#[derive(Debug, Clone)]
pub struct LocalMaterializer {
    templates_root: PathBuf,
}

impl LocalMaterializer {
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }
}

impl FileMaterializer for LocalMaterializer {
    fn template(
        &self,
        project: &Project,
        source_dir: &str,
        filename: &str,
        destination_dir: &str,
    ) -> ForgeResult<()> {
        let source = self.templates_root.join(source_dir).join(filename);
        if !source.is_file() {
            return Err(ApplicationError::TemplateNotFound {
                source_dir: source_dir.to_string(),
                filename: filename.to_string(),
            }
            .into());
        }

        let body = fs::read_to_string(&source).map_err(|e| ApplicationError::Filesystem {
            path: source.clone(),
            reason: e.to_string(),
        })?;

        let path = super::write_to_project(project, destination_dir, filename, &body)?;
        debug!(source = %source.display(), path = %path.display(), "template copied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootforge_core::error::ForgeError;

    #[test]
    fn copies_from_templates_root() {
        let templates = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let source_dir = templates.path().join("server/web/main");
        fs::create_dir_all(&source_dir).unwrap();
        fs::write(source_dir.join("Custom.java"), "class Custom {}").unwrap();

        let project = Project::builder(out.path()).build();
        let materializer = LocalMaterializer::new(templates.path());

        materializer
            .template(&project, "server/web/main", "Custom.java", "src/main/java")
            .unwrap();

        let written =
            fs::read_to_string(out.path().join("src/main/java/Custom.java")).unwrap();
        assert_eq!(written, "class Custom {}");
    }

    #[test]
    fn missing_source_is_not_found() {
        let templates = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let project = Project::builder(out.path()).build();
        let materializer = LocalMaterializer::new(templates.path());

        let result = materializer.template(&project, "server/web/main", "Missing.java", "src");
        assert!(matches!(
            result,
            Err(ForgeError::Application(
                ApplicationError::TemplateNotFound { .. }
            ))
        ));
    }
}
