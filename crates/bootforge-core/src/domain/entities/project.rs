//! The project descriptor.
//!
//! One [`Project`] exists per generation run. It is created by the caller,
//! mutated in place by every feature operation, and discarded afterwards —
//! nothing persists across runs. It owns exactly one [`DependencyLedger`]
//! and one [`PropertyRegistry`] for its lifetime.

use crate::domain::entities::dependency::{DependencyLedger, MergeStrategy};
use crate::domain::entities::properties::PropertyRegistry;
use crate::domain::error::DomainError;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Package used for property seeding and template destinations when the
/// caller configured none.
pub const DEFAULT_PACKAGE: &str = "com.example.demo";

// ── Configuration values ─────────────────────────────────────────────────────

/// A typed scalar in the project's configuration map.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Outcome of a typed configuration read.
///
/// `Invalid` is distinct from `Absent`: a present-but-malformed value is a
/// recoverable condition the composer handles with a logged warning and a
/// documented default, never by aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLookup<T> {
    Absent,
    Invalid { reason: String },
    Present(T),
}

// ── Project ──────────────────────────────────────────────────────────────────

/// Mutable descriptor accumulating configuration facts for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    folder: PathBuf,
    package_name: Option<String>,
    config: HashMap<String, ConfigValue>,
    dependencies: DependencyLedger,
    properties: PropertyRegistry,
}

impl Project {
    /// Start building a descriptor rooted at `folder`.
    pub fn builder(folder: impl Into<PathBuf>) -> ProjectBuilder {
        ProjectBuilder {
            folder: folder.into(),
            package_name: None,
            config: HashMap::new(),
            strategy: MergeStrategy::default(),
        }
    }

    /// Output root of the generated project.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Slash-path derived from the package name (`com.acme.app` →
    /// `com/acme/app`).
    pub fn package_path(&self) -> Option<String> {
        self.package_name.as_ref().map(|name| name.replace('.', "/"))
    }

    /// Like [`Self::package_path`], falling back to [`DEFAULT_PACKAGE`].
    pub fn package_path_or_default(&self) -> String {
        self.package_path()
            .unwrap_or_else(|| DEFAULT_PACKAGE.replace('.', "/"))
    }

    /// Raw configuration lookup (read-only view).
    pub fn config(&self, key: &str) -> Option<&ConfigValue> {
        self.config.get(key)
    }

    /// Typed read of an optional integer configuration value.
    pub fn integer_config(&self, key: &str) -> ConfigLookup<i64> {
        match self.config.get(key) {
            None => ConfigLookup::Absent,
            Some(ConfigValue::Int(n)) => ConfigLookup::Present(*n),
            Some(other) => ConfigLookup::Invalid {
                reason: format!("expected an integer, got '{other}'"),
            },
        }
    }

    pub fn dependencies(&self) -> &DependencyLedger {
        &self.dependencies
    }

    pub fn dependencies_mut(&mut self) -> &mut DependencyLedger {
        &mut self.dependencies
    }

    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyRegistry {
        &mut self.properties
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`Project`]. Package names are validated at the setter so
/// `build` itself cannot fail.
#[derive(Debug)]
pub struct ProjectBuilder {
    folder: PathBuf,
    package_name: Option<String>,
    config: HashMap<String, ConfigValue>,
    strategy: MergeStrategy,
}

impl ProjectBuilder {
    /// Set the base package for generated sources.
    ///
    /// Accepts dotted identifiers: each segment starts with a letter or
    /// underscore and continues with letters, digits, or underscores.
    pub fn package_name(mut self, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_package_name(&name)?;
        self.package_name = Some(name);
        Ok(self)
    }

    /// Add one typed configuration entry.
    pub fn config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Override the dependency merge strategy (default: `FirstWins`).
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> Project {
        Project {
            folder: self.folder,
            package_name: self.package_name,
            config: self.config,
            dependencies: DependencyLedger::with_strategy(self.strategy),
            properties: PropertyRegistry::new(),
        }
    }
}

fn validate_package_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("empty"));
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(invalid("empty segment"));
        }
        let mut chars = segment.chars();
        let first = chars.next().expect("segment is non-empty");
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(invalid("segment must start with a letter or underscore"));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("segment contains an invalid character"));
        }
    }
    Ok(())
}
