//! In-memory materializer for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use bootforge_core::application::{ApplicationError, ports::FileMaterializer};
use bootforge_core::domain::Project;
use bootforge_core::error::ForgeResult;

use crate::catalog::TemplateCatalog;

/// One recorded materialization request, as received over the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTemplate {
    pub source_dir: String,
    pub filename: String,
    pub destination_dir: String,
}

/// In-memory materializer: records every request, keeps written content in
/// a map keyed by `destination_dir/filename`.
#[derive(Debug, Clone, Default)]
pub struct MemoryMaterializer {
    inner: Arc<RwLock<MemoryMaterializerInner>>,
}

#[derive(Debug, Default)]
struct MemoryMaterializerInner {
    catalog: Option<TemplateCatalog>,
    requests: Vec<RecordedTemplate>,
    files: HashMap<String, String>,
}

impl MemoryMaterializer {
    /// Accept any source; written content is the `source_dir/filename` key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate sources against a catalog, like the production adapters do.
    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        let materializer = Self::default();
        materializer.inner.write().unwrap().catalog = Some(catalog);
        materializer
    }

    /// Every request seen so far, in call order (testing helper).
    pub fn requests(&self) -> Vec<RecordedTemplate> {
        self.inner.read().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.read().unwrap().requests.len()
    }

    /// Content written for a destination (testing helper).
    pub fn file(&self, destination_dir: &str, filename: &str) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(&format!("{destination_dir}/{filename}")).cloned()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.requests.clear();
        inner.files.clear();
    }
}

impl FileMaterializer for MemoryMaterializer {
    fn template(
        &self,
        _project: &Project,
        source_dir: &str,
        filename: &str,
        destination_dir: &str,
    ) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap();

        let body = match &inner.catalog {
            Some(catalog) => catalog
                .get(source_dir, filename)
                .ok_or_else(|| ApplicationError::TemplateNotFound {
                    source_dir: source_dir.to_string(),
                    filename: filename.to_string(),
                })?
                .to_string(),
            None => format!("{source_dir}/{filename}"),
        };

        inner.requests.push(RecordedTemplate {
            source_dir: source_dir.to_string(),
            filename: filename.to_string(),
            destination_dir: destination_dir.to_string(),
        });
        inner
            .files
            .insert(format!("{destination_dir}/{filename}"), body);
        Ok(())
    }
}
