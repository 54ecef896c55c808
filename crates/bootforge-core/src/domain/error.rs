//! Domain-level errors.

use thiserror::Error;

/// Root domain error type.
///
/// All variants are cloneable and categorizable for CLI display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}

impl DomainError {
    /// Error category for CLI display styling.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. } => ErrorCategory::Validation,
            Self::UnknownEnvironment(_) | Self::UnknownFeature(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_errors_are_validation() {
        let err = DomainError::InvalidPackageName {
            name: "1com".into(),
            reason: "segment starts with a digit".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unknown_feature_is_not_found() {
        assert_eq!(
            DomainError::UnknownFeature("x".into()).category(),
            ErrorCategory::NotFound
        );
    }
}
