//! Application layer for bootforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FeatureService,
//!   TemplateMaterializer, ExportService)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences calls into the domain stores but holds
//! no invariants of its own. Composition rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ExportService, FeatureService, TemplateMaterializer};

// Re-export port traits (for adapter implementation)
pub use ports::{BuildTool, DiagnosticSink, FileMaterializer};

pub use error::ApplicationError;
