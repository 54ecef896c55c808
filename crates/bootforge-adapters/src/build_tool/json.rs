//! JSON-manifest build-tool adapter.
//!
//! Accumulates the exported facts and renders them as a pretty-printed
//! JSON document, in declaration order. The CLI writes it next to the
//! generated sources as the hand-off to whichever build-file writer the
//! host uses.

use std::sync::{Arc, RwLock};

use serde::Serialize;

use bootforge_core::application::{ApplicationError, ports::BuildTool};
use bootforge_core::domain::{DependencyEntry, Environment, Project, PropertyValue};
use bootforge_core::error::ForgeResult;

#[derive(Debug, Serialize)]
struct ManifestProperty {
    environment: Environment,
    key: String,
    value: PropertyValue,
}

#[derive(Debug, Default, Serialize)]
struct Manifest {
    dependencies: Vec<DependencyEntry>,
    properties: Vec<ManifestProperty>,
}

/// Build-tool adapter producing a neutral JSON staging manifest.
#[derive(Debug, Clone, Default)]
pub struct JsonManifestBuildTool {
    inner: Arc<RwLock<Manifest>>,
}

impl JsonManifestBuildTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the accumulated manifest as pretty-printed JSON.
    pub fn render(&self) -> ForgeResult<String> {
        let manifest = self.inner.read().unwrap();
        serde_json::to_string_pretty(&*manifest).map_err(|e| {
            ApplicationError::Export {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl BuildTool for JsonManifestBuildTool {
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
        self.inner.write().unwrap().properties.push(ManifestProperty {
            environment,
            key: key.to_string(),
            value: value.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootforge_core::domain::{Dependency, DependencyId};

    #[test]
    fn renders_declaration_order() {
        let tool = JsonManifestBuildTool::new();
        let project = Project::builder("/tmp/demo").build();

        tool.add_dependency(
            &project,
            &DependencyEntry {
                dependency: Dependency::new("org.springframework.boot", "spring-boot-starter-web"),
                exclusions: vec![DependencyId::new(
                    "org.springframework.boot",
                    "spring-boot-starter-tomcat",
                )],
            },
        )
        .unwrap();
        tool.add_property(
            &project,
            Environment::Main,
            "server.port",
            &PropertyValue::Int(8080),
        )
        .unwrap();

        let json = tool.render().unwrap();
        assert!(json.contains("spring-boot-starter-web"));
        assert!(json.contains("spring-boot-starter-tomcat"));
        assert!(json.contains("\"server.port\""));
        assert!(json.contains("8080"));
        // dependencies section precedes properties
        assert!(json.find("dependencies").unwrap() < json.find("properties").unwrap());
    }

    #[test]
    fn empty_manifest_renders_empty_sections() {
        let tool = JsonManifestBuildTool::new();
        let json = tool.render().unwrap();
        assert!(json.contains("\"dependencies\": []"));
        assert!(json.contains("\"properties\": []"));
    }
}
