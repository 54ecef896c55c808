//! Error handling for the bootforge CLI.
//!
//! Provides structured errors with user-friendly messages, actionable
//! suggestions, and exit-code mapping.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use bootforge_core::domain::Feature;
use bootforge_core::error::{ErrorCategory as CoreCategory, ForgeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The user asked for a feature this build does not know.
    #[error("Unknown feature '{name}'")]
    UnknownFeature { name: String },

    /// A `--config` pair could not be parsed.
    #[error("Invalid config entry '{pair}': expected KEY=VALUE")]
    InvalidConfigPair { pair: String },

    /// An error propagated from the core engine.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] ForgeError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFeature { name } => {
                let mut suggestions = vec![
                    format!("'{name}' is not a known feature"),
                    "Available features:".into(),
                ];
                for feature in Feature::ALL {
                    suggestions.push(format!("  • {:<20} {}", feature, feature.description()));
                }
                suggestions
            }

            Self::InvalidConfigPair { pair } => vec![
                format!("Could not parse '{pair}'"),
                "Use KEY=VALUE, e.g. --config serverPort=9090".into(),
            ],

            Self::Core(core) => match core.category() {
                CoreCategory::Validation => vec![
                    "The project descriptor was rejected".into(),
                    "Check the package name: dotted identifiers like com.acme.app".into(),
                ],
                CoreCategory::NotFound => vec![
                    "A template source is missing".into(),
                    "When using --templates-dir, mirror the embedded layout (server/web/main, server/web/test)".into(),
                ],
                CoreCategory::Internal => vec![
                    "Check file permissions and available disk space".into(),
                ],
            },

            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the destination directory is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFeature { .. } => ErrorCategory::NotFound,
            Self::InvalidConfigPair { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Internal/system error.
    Internal,
}
