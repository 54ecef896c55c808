//! Recording build-tool adapter for testing.

use std::sync::{Arc, RwLock};

use bootforge_core::application::ports::BuildTool;
use bootforge_core::domain::{DependencyEntry, Environment, Project, PropertyValue};
use bootforge_core::error::ForgeResult;

/// Captures every port call, in order, for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuildTool {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    dependencies: Vec<DependencyEntry>,
    properties: Vec<(Environment, String, PropertyValue)>,
}

impl RecordingBuildTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependencies(&self) -> Vec<DependencyEntry> {
        self.inner.read().unwrap().dependencies.clone()
    }

    pub fn properties(&self) -> Vec<(Environment, String, PropertyValue)> {
        self.inner.read().unwrap().properties.clone()
    }
}

impl BuildTool for RecordingBuildTool {
    fn add_dependency(&self, _project: &Project, entry: &DependencyEntry) -> ForgeResult<()> {
        self.inner.write().unwrap().dependencies.push(entry.clone());
        Ok(())
    }

    fn add_property(
        &self,
        _project: &Project,
        environment: Environment,
        key: &str,
        value: &PropertyValue,
    ) -> ForgeResult<()> {
        self.inner
            .write()
            .unwrap()
            .properties
            .push((environment, key.to_string(), value.clone()));
        Ok(())
    }
}
