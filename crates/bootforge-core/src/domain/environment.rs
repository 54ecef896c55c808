//! The `main` / `test` environment split.
//!
//! Properties and template destinations are partitioned by environment: the
//! main tree carries the application configuration, the test tree carries
//! the overrides the generated test harness needs.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two trees a generated project is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Main,
    Test,
}

impl Environment {
    /// Both environments, in the order build files list them.
    pub const ALL: [Self; 2] = [Self::Main, Self::Test];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }

    /// Root of the generated source tree for this environment.
    pub const fn source_root(&self) -> &'static str {
        match self {
            Self::Main => "src/main/java",
            Self::Test => "src/test/java",
        }
    }

    /// Subfolder inside a feature's template namespace holding this
    /// environment's templates.
    pub const fn template_subfolder(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Test),
            other => Err(DomainError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Environment::Main.to_string(), "main");
        assert_eq!(Environment::Test.to_string(), "test");
    }

    #[test]
    fn source_roots_differ() {
        assert_eq!(Environment::Main.source_root(), "src/main/java");
        assert_eq!(Environment::Test.source_root(), "src/test/java");
    }

    #[test]
    fn from_str_round_trips() {
        for env in Environment::ALL {
            assert_eq!(env.as_str().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn from_str_unknown_errors() {
        assert!("staging".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
