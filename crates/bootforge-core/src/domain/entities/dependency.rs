//! The dependency ledger.
//!
//! Dependencies are identified by their `(group id, artifact id)` pair and
//! recorded in declaration order. Repeated declarations compose under an
//! explicit, named [`MergeStrategy`] instead of an implicit overwrite rule,
//! so hosts can swap the policy without touching the feature scripts.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ── Identity ─────────────────────────────────────────────────────────────────

/// Identity of a dependency: group id + artifact id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyId {
    group_id: String,
    artifact_id: String,
}

impl DependencyId {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

// ── Dependency ───────────────────────────────────────────────────────────────

/// A declared dependency, optionally pinned to a version (literal or a
/// `${property}` reference resolved by the build tool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    #[serde(flatten)]
    id: DependencyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            id: DependencyId::new(group_id, artifact_id),
            version: None,
        }
    }

    /// Attach a version (or a `${property}` reference).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn id(&self) -> &DependencyId {
        &self.id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

// ── Ledger ───────────────────────────────────────────────────────────────────

/// How a repeated declaration of an already-present identity composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// The first declaration owns the entry; later ones are no-ops.
    /// Features that need exclusions must be the first to declare that
    /// dependency.
    #[default]
    FirstWins,
    /// The latest declaration replaces dependency and exclusions in place.
    LastWins,
    /// The first dependency is kept; exclusion lists are unioned.
    Merge,
}

/// One ledger entry: a dependency plus its excluded transitive dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    #[serde(flatten)]
    pub dependency: Dependency,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<DependencyId>,
}

/// Declaration-ordered set of dependencies, de-duplicated by identity.
///
/// Entries are kept in a sequence for ordered iteration, with an auxiliary
/// identity → position index for O(1) existence lookup.
#[derive(Debug, Clone, Default)]
pub struct DependencyLedger {
    strategy: MergeStrategy,
    entries: Vec<DependencyEntry>,
    index: HashMap<DependencyId, usize>,
}

impl DependencyLedger {
    /// Ledger with the default [`MergeStrategy::FirstWins`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: MergeStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub const fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Record a dependency with its exclusion list.
    ///
    /// A new identity is appended; an already-present identity composes
    /// under the ledger's merge strategy (the entry never moves from its
    /// first-seen position). Returns `true` if the ledger changed.
    pub fn insert(&mut self, dependency: Dependency, exclusions: Vec<DependencyId>) -> bool {
        match self.index.get(dependency.id()) {
            None => {
                self.index
                    .insert(dependency.id().clone(), self.entries.len());
                self.entries.push(DependencyEntry {
                    dependency,
                    exclusions,
                });
                true
            }
            Some(&position) => match self.strategy {
                MergeStrategy::FirstWins => false,
                MergeStrategy::LastWins => {
                    self.entries[position] = DependencyEntry {
                        dependency,
                        exclusions,
                    };
                    true
                }
                MergeStrategy::Merge => {
                    let entry = &mut self.entries[position];
                    let mut changed = false;
                    for exclusion in exclusions {
                        if !entry.exclusions.contains(&exclusion) {
                            entry.exclusions.push(exclusion);
                            changed = true;
                        }
                    }
                    changed
                }
            },
        }
    }

    pub fn contains(&self, id: &DependencyId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &DependencyId) -> Option<&DependencyEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DependencyLedger {
    fn eq(&self, other: &Self) -> bool {
        self.strategy == other.strategy && self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web() -> Dependency {
        Dependency::new("org.springframework.boot", "spring-boot-starter-web")
    }

    fn tomcat() -> DependencyId {
        DependencyId::new("org.springframework.boot", "spring-boot-starter-tomcat")
    }

    fn jetty() -> DependencyId {
        DependencyId::new("org.eclipse.jetty", "jetty-server")
    }

    #[test]
    fn insert_is_idempotent() {
        let mut ledger = DependencyLedger::new();
        assert_eq!(ledger.strategy(), MergeStrategy::FirstWins);
        assert!(ledger.insert(web(), vec![]));
        assert!(!ledger.insert(web(), vec![]));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn first_wins_keeps_earlier_exclusions() {
        let mut ledger = DependencyLedger::new();
        ledger.insert(web(), vec![tomcat()]);
        ledger.insert(web(), vec![jetty()]);

        let entry = ledger.get(web().id()).unwrap();
        assert_eq!(entry.exclusions, vec![tomcat()]);
    }

    #[test]
    fn last_wins_replaces_in_place() {
        let mut ledger = DependencyLedger::with_strategy(MergeStrategy::LastWins);
        ledger.insert(web(), vec![tomcat()]);
        ledger.insert(Dependency::new("io.undertow", "undertow-core"), vec![]);
        ledger.insert(web(), vec![jetty()]);

        let entry = ledger.get(web().id()).unwrap();
        assert_eq!(entry.exclusions, vec![jetty()]);
        // position is unchanged by the replacement
        assert_eq!(ledger.iter().next().unwrap().dependency, web());
    }

    #[test]
    fn merge_unions_exclusions() {
        let mut ledger = DependencyLedger::with_strategy(MergeStrategy::Merge);
        ledger.insert(web(), vec![tomcat()]);
        ledger.insert(web(), vec![tomcat(), jetty()]);

        let entry = ledger.get(web().id()).unwrap();
        assert_eq!(entry.exclusions, vec![tomcat(), jetty()]);
    }

    #[test]
    fn iteration_preserves_declaration_order() {
        let mut ledger = DependencyLedger::new();
        ledger.insert(Dependency::new("g", "b"), vec![]);
        ledger.insert(Dependency::new("g", "a"), vec![]);
        ledger.insert(Dependency::new("g", "c"), vec![]);

        let artifacts: Vec<_> = ledger
            .iter()
            .map(|e| e.dependency.id().artifact_id())
            .collect();
        assert_eq!(artifacts, ["b", "a", "c"]);
    }

    #[test]
    fn version_reference_is_preserved() {
        let dep = Dependency::new("org.zalando", "problem-spring-web")
            .with_version("${problem-spring-web.version}");
        assert_eq!(dep.version(), Some("${problem-spring-web.version}"));
    }
}
