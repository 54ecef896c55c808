//! File-materialization adapters.
//!
//! Three implementations of the `FileMaterializer` port:
//! - [`EmbeddedMaterializer`] — production default; sources come from the
//!   embedded [`crate::catalog::TemplateCatalog`]
//! - [`LocalMaterializer`] — sources come from a templates directory on
//!   disk (user-supplied template collections)
//! - [`MemoryMaterializer`] — testing; records every request and keeps the
//!   written content in memory

mod embedded;
mod local;
mod memory;

pub use embedded::EmbeddedMaterializer;
pub use local::LocalMaterializer;
pub use memory::{MemoryMaterializer, RecordedTemplate};

use std::fs;
use std::path::PathBuf;

use bootforge_core::application::ApplicationError;
use bootforge_core::domain::Project;
use bootforge_core::error::ForgeResult;

/// Write one materialized file under the project's output folder.
///
/// Writes are idempotent: rewriting the same body to the same destination
/// leaves identical content on disk.
fn write_to_project(
    project: &Project,
    destination_dir: &str,
    filename: &str,
    body: &str,
) -> ForgeResult<PathBuf> {
    let dir = project.folder().join(destination_dir);
    fs::create_dir_all(&dir).map_err(|e| ApplicationError::Filesystem {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    let path = dir.join(filename);
    fs::write(&path, body).map_err(|e| ApplicationError::Filesystem {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(path)
}
