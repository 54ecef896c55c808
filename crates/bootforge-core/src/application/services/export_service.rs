//! Export service.
//!
//! The ledger and registry are an in-memory staging model; their final
//! writes go through the build-tool collaborator. This service replays the
//! staged facts in declaration order — the order is load-bearing, build
//! files preserve it for human-readable diffs.

use tracing::{info, instrument};

use crate::{application::ports::BuildTool, domain::{Environment, Project}, error::ForgeResult};

/// Replays a composed project through the build-tool port.
pub struct ExportService {
    build_tool: Box<dyn BuildTool>,
}

impl ExportService {
    pub fn new(build_tool: Box<dyn BuildTool>) -> Self {
        Self { build_tool }
    }

    /// Write every staged dependency and property, main environment first.
    #[instrument(skip_all, fields(folder = %project.folder().display()))]
    pub fn export(&self, project: &Project) -> ForgeResult<()> {
        for entry in project.dependencies().iter() {
            self.build_tool.add_dependency(project, entry)?;
        }
        for environment in Environment::ALL {
            for (key, value) in project.properties().iter(environment) {
                self.build_tool
                    .add_property(project, environment, key, value)?;
            }
        }
        info!(
            dependencies = project.dependencies().len(),
            "Staged model exported"
        );
        Ok(())
    }
}
