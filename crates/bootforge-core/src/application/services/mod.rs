//! Application services.
//!
//! - [`FeatureService`] — the feature composer: one operation per feature,
//!   each a fixed, ordered script over the project's stores and the
//!   template materializer
//! - [`TemplateMaterializer`] — resolves logical template references to
//!   concrete source/destination pairs and delegates the copy
//! - [`ExportService`] — replays the staged model through the build-tool
//!   port

pub mod export_service;
pub mod feature_service;
pub mod materializer;

pub use export_service::ExportService;
pub use feature_service::FeatureService;
pub use materializer::TemplateMaterializer;
