//! Template materializer.
//!
//! Resolves a logical `(feature namespace, environment, filename,
//! destination sub-path)` reference to a concrete source/destination pair
//! and delegates the copy to the file-materialization collaborator. The
//! materializer itself is stateless: it takes the project by reference on
//! every call and writes exactly one file per call.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::FileMaterializer},
    domain::{Environment, Project},
    error::ForgeResult,
};

/// Resolves and requests template materializations.
pub struct TemplateMaterializer {
    files: Box<dyn FileMaterializer>,
}

impl TemplateMaterializer {
    pub fn new(files: Box<dyn FileMaterializer>) -> Self {
        Self { files }
    }

    /// Materialize one template file.
    ///
    /// The destination directory is the environment's source root joined
    /// with the project's package path (default package when none is
    /// configured) and the feature's fixed destination sub-path. The source
    /// directory is the feature namespace joined with the environment's
    /// template subfolder.
    ///
    /// Failures are fatal for the current feature operation: a missing
    /// source propagates unchanged from the collaborator, and an empty
    /// destination is rejected here.
    #[instrument(skip(self, project), fields(filename = %filename, environment = %environment))]
    pub fn materialize(
        &self,
        project: &Project,
        source_namespace: &str,
        environment: Environment,
        filename: &str,
        destination_subpath: &str,
    ) -> ForgeResult<()> {
        let source_dir = join_path(&[source_namespace, environment.template_subfolder()]);
        let destination_dir = join_path(&[
            environment.source_root(),
            &project.package_path_or_default(),
            destination_subpath,
        ]);

        if destination_dir.is_empty() {
            return Err(ApplicationError::TemplateResolution {
                filename: filename.to_string(),
                reason: "empty destination path".to_string(),
            }
            .into());
        }

        debug!(source = %source_dir, destination = %destination_dir, "template resolved");
        self.files
            .template(project, &source_dir, filename, &destination_dir)
    }
}

/// Join logical path segments with `/`, skipping empty segments.
fn join_path(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}
