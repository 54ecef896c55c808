//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bootforge-adapters` crate provides implementations; tests use the
//! mockall automocks generated below.

use crate::domain::{DependencyEntry, Environment, Project, PropertyValue};
use crate::error::ForgeResult;

/// Port for the file-materialization collaborator.
///
/// Implemented by:
/// - `bootforge_adapters::EmbeddedMaterializer` (embedded catalog → disk)
/// - `bootforge_adapters::LocalMaterializer` (templates directory → disk)
/// - `bootforge_adapters::MemoryMaterializer` (testing)
///
/// ## Design Notes
///
/// - `source_dir` and `destination_dir` are logical slash-paths; the
///   adapter resolves them against its template catalog and the project's
///   output folder
/// - Copying the same source to the same destination twice must yield
///   identical file content (idempotent regeneration)
#[cfg_attr(test, mockall::automock)]
pub trait FileMaterializer: Send + Sync {
    /// Copy or render one template file.
    ///
    /// Fails with [`crate::application::ApplicationError::TemplateNotFound`]
    /// when the source/file pair does not exist.
    fn template(
        &self,
        project: &Project,
        source_dir: &str,
        filename: &str,
        destination_dir: &str,
    ) -> ForgeResult<()>;
}

/// Port for the build-tool collaborator.
///
/// The ledger and registry are an in-memory staging model; their final
/// writes go through this port, in declaration order, when a run is
/// exported. What "persisting" means (POM, Gradle script, manifest) is the
/// adapter's business.
///
/// Implemented by:
/// - `bootforge_adapters::JsonManifestBuildTool` (neutral JSON manifest)
/// - `bootforge_adapters::RecordingBuildTool` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait BuildTool: Send + Sync {
    /// Persist one declared dependency with its exclusions.
    fn add_dependency(&self, project: &Project, entry: &DependencyEntry) -> ForgeResult<()>;

    /// Persist one property under its environment.
    fn add_property(
        &self,
        project: &Project,
        environment: Environment,
        key: &str,
        value: &PropertyValue,
    ) -> ForgeResult<()>;
}

/// Port for user-facing diagnostics.
///
/// Injected into the composer instead of a global logger so warning
/// emission is observable in unit tests.
///
/// Implemented by:
/// - `bootforge_adapters::TracingSink` (production)
/// - `bootforge_adapters::MemorySink` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Emit one warning. Warnings never abort the run.
    fn warn(&self, message: &str);
}
