//! The property registry.
//!
//! A per-environment key/value store for build and runtime properties.
//! Ordering is part of the contract: downstream build-file writers preserve
//! declaration order for human-readable diffs, so iteration yields entries
//! in insertion order, with an overwritten key keeping its first-seen
//! position.
//!
//! Backed by [`IndexMap`] — an explicit ordered association structure with
//! O(1) existence lookup, not an incidental iteration-order guarantee.

use crate::domain::environment::Environment;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

// ── PropertyValue ────────────────────────────────────────────────────────────

/// A property value: string or typed scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

// ── PropertyRegistry ─────────────────────────────────────────────────────────

/// Ordered key/value store, split per environment.
///
/// At most one value is active per `(environment, key)`: re-adding a key
/// overwrites the prior value (last write wins) without creating a duplicate
/// entry or moving the key's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRegistry {
    main: IndexMap<String, PropertyValue>,
    test: IndexMap<String, PropertyValue>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `(environment, key)`.
    ///
    /// Never fails: an environment with no prior entries simply starts a new
    /// ordered sequence.
    pub fn put(
        &mut self,
        environment: Environment,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) {
        self.entries_mut(environment).insert(key.into(), value.into());
    }

    pub fn get(&self, environment: Environment, key: &str) -> Option<&PropertyValue> {
        self.entries(environment).get(key)
    }

    pub fn contains(&self, environment: Environment, key: &str) -> bool {
        self.entries(environment).contains_key(key)
    }

    /// Properties for one environment, in insertion order.
    pub fn iter(&self, environment: Environment) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries(environment).iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self, environment: Environment) -> usize {
        self.entries(environment).len()
    }

    pub fn is_empty(&self, environment: Environment) -> bool {
        self.entries(environment).is_empty()
    }

    fn entries(&self, environment: Environment) -> &IndexMap<String, PropertyValue> {
        match environment {
            Environment::Main => &self.main,
            Environment::Test => &self.test,
        }
    }

    fn entries_mut(
        &mut self,
        environment: Environment,
    ) -> &mut IndexMap<String, PropertyValue> {
        match environment {
            Environment::Main => &mut self.main,
            Environment::Test => &mut self.test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Environment::{Main, Test};

    #[test]
    fn overwrite_keeps_first_seen_position() {
        let mut registry = PropertyRegistry::new();
        registry.put(Main, "a", "1");
        registry.put(Main, "b", "2");
        registry.put(Main, "a", "updated");
        registry.put(Main, "c", "3");

        let keys: Vec<_> = registry.iter(Main).map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(
            registry.get(Main, "a"),
            Some(&PropertyValue::Str("updated".into()))
        );
        assert_eq!(registry.len(Main), 3);
    }

    #[test]
    fn environments_are_independent() {
        let mut registry = PropertyRegistry::new();
        registry.put(Main, "server.port", 8080);
        registry.put(Test, "server.port", 0);

        assert_eq!(registry.get(Main, "server.port"), Some(&PropertyValue::Int(8080)));
        assert_eq!(registry.get(Test, "server.port"), Some(&PropertyValue::Int(0)));
    }

    #[test]
    fn missing_environment_is_just_empty() {
        let registry = PropertyRegistry::new();
        assert!(registry.is_empty(Test));
        assert!(!registry.contains(Test, "server.port"));
        assert_eq!(registry.iter(Test).count(), 0);
    }

    #[test]
    fn typed_values_display_as_build_file_text() {
        assert_eq!(PropertyValue::from("ant_path_matcher").to_string(), "ant_path_matcher");
        assert_eq!(PropertyValue::from(8080).to_string(), "8080");
        assert_eq!(PropertyValue::from(false).to_string(), "false");
    }
}
