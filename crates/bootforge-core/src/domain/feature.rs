//! Named features.
//!
//! A feature is a fixed, ordered sequence of mutations (dependencies,
//! properties, template files) applied to a project descriptor. The enum
//! here is the catalog; the scripts live in
//! `application::services::FeatureService`.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// A feature that can be composed onto a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Servlet web stack on the default embedded server.
    WebStack,
    /// Web stack running on Undertow instead of the default server.
    Undertow,
    /// Centralized exception handling for the generated REST layer.
    ExceptionHandling,
}

impl Feature {
    /// Every applicable feature, in display order.
    pub const ALL: [Self; 3] = [Self::WebStack, Self::Undertow, Self::ExceptionHandling];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WebStack => "web",
            Self::Undertow => "undertow",
            Self::ExceptionHandling => "exception-handling",
        }
    }

    /// One-line description shown by `bootforge features`.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::WebStack => "Spring MVC web stack with OpenAPI documentation",
            Self::Undertow => "Web stack on the Undertow runtime (Tomcat excluded)",
            Self::ExceptionHandling => "Problem-based exception handling for the REST layer",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" | "webstack" => Ok(Self::WebStack),
            "undertow" => Ok(Self::Undertow),
            "exception-handling" | "exceptions" => Ok(Self::ExceptionHandling),
            other => Err(DomainError::UnknownFeature(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("web".parse::<Feature>().unwrap(), Feature::WebStack);
        assert_eq!(
            "exceptions".parse::<Feature>().unwrap(),
            Feature::ExceptionHandling
        );
    }

    #[test]
    fn from_str_unknown_errors() {
        assert!("graphql".parse::<Feature>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for feature in Feature::ALL {
            assert_eq!(feature.to_string().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn descriptions_are_non_empty() {
        for feature in Feature::ALL {
            assert!(!feature.description().is_empty());
        }
    }
}
