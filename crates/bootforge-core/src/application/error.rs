//! Application layer errors.
//!
//! These represent orchestration failures, not business-rule violations.
//! Template failures are fatal for the current feature operation: the run
//! stops with the failing file named, and no partial-file cleanup happens.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template's destination path could not be resolved.
    #[error("template resolution failed for '{filename}': {reason}")]
    TemplateResolution { filename: String, reason: String },

    /// The source namespace/file pair does not exist in the template
    /// catalog. Raised by the file-materialization collaborator and
    /// propagated unchanged.
    #[error("template source not found: {source_dir}/{filename}")]
    TemplateNotFound {
        source_dir: String,
        filename: String,
    },

    /// A filesystem write failed while materializing a template.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The build-tool collaborator rejected an exported fact.
    #[error("build tool export failed: {reason}")]
    Export { reason: String },
}

impl ApplicationError {
    /// Error category for display purposes.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateResolution { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } | Self::Export { .. } => ErrorCategory::Internal,
        }
    }
}
