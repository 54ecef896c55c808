//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bootforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `FileMaterializer`: template copy/render
//!   - `BuildTool`: build-file persistence of staged facts
//!   - `DiagnosticSink`: user-facing warnings
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer, implemented by services)

pub mod output;

pub use output::{BuildTool, DiagnosticSink, FileMaterializer};
