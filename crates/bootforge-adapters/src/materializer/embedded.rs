//! Materializer backed by the embedded template catalog.

use tracing::debug;

use bootforge_core::application::{ApplicationError, ports::FileMaterializer};
use bootforge_core::domain::Project;
use bootforge_core::error::ForgeResult;

use crate::catalog::TemplateCatalog;

/// Production materializer: embedded catalog in, project folder out.
#[derive(Debug, Clone)]
pub struct EmbeddedMaterializer {
    catalog: TemplateCatalog,
}

impl EmbeddedMaterializer {
    pub fn new() -> Self {
        Self {
            catalog: TemplateCatalog::builtin(),
        }
    }
}

impl Default for EmbeddedMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMaterializer for EmbeddedMaterializer {
    fn template(
        &self,
        project: &Project,
        source_dir: &str,
        filename: &str,
        destination_dir: &str,
    ) -> ForgeResult<()> {
        let body = self.catalog.get(source_dir, filename).ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                source_dir: source_dir.to_string(),
                filename: filename.to_string(),
            }
        })?;

        let path = super::write_to_project(project, destination_dir, filename, body)?;
        debug!(path = %path.display(), "template written");
        Ok(())
    }
}
