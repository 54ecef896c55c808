//! Diagnostic-sink adapters.
//!
//! The composer receives its sink by injection; these are the two stock
//! implementations.

use std::sync::{Arc, RwLock};

use bootforge_core::application::ports::DiagnosticSink;

/// Production sink: forwards to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Test sink: records warnings for assertion.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages.read().unwrap().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages.write().unwrap().push(message.to_string());
    }
}
