//! Infrastructure adapters for bootforge.
//!
//! This crate implements the ports defined in
//! `bootforge_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod build_tool;
pub mod catalog;
pub mod diagnostics;
pub mod materializer;

// Re-export commonly used adapters
pub use build_tool::{JsonManifestBuildTool, RecordingBuildTool};
pub use catalog::TemplateCatalog;
pub use diagnostics::{MemorySink, TracingSink};
pub use materializer::{EmbeddedMaterializer, LocalMaterializer, MemoryMaterializer};
