//! Bootforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the bootforge
//! feature-composition engine, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          bootforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (FeatureService, TemplateMaterializer, │
//! │   ExportService) — orchestration only   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: FileMaterializer, BuildTool,   │
//! │  DiagnosticSink)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   bootforge-adapters (Infrastructure)   │
//! │ (EmbeddedMaterializer, MemorySink, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Project, DependencyLedger,            │
//! │   PropertyRegistry, Feature)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bootforge_core::{
//!     application::FeatureService,
//!     domain::{Feature, Project},
//! };
//!
//! // 1. Create the project descriptor for one generation run
//! let mut project = Project::builder("./my-app")
//!     .package_name("com.acme.app").unwrap()
//!     .config("serverPort", 9090)
//!     .build();
//!
//! // 2. Apply features (with injected adapters)
//! let service = FeatureService::new(materializer, diagnostics);
//! service.apply(&mut project, Feature::WebStack).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportService, FeatureService, TemplateMaterializer,
        ports::{BuildTool, DiagnosticSink, FileMaterializer},
    };
    pub use crate::domain::{
        ConfigLookup, ConfigValue, Dependency, DependencyEntry, DependencyId, DependencyLedger,
        Environment, Feature, MergeStrategy, Project, ProjectBuilder, PropertyRegistry,
        PropertyValue,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
