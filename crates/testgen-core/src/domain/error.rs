// ============================================================================
// domain/error.rs - DETECTION & CONFIG DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the config resolver logs and discards them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Config shape errors
    // ========================================================================
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Required config field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Parse errors
    // ========================================================================
    #[error("unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("unknown testing framework: {0}")]
    UnknownFramework(String),

    #[error("unknown test type: {0}")]
    UnknownTestType(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig { field, .. } => vec![
                format!("Check the '{}' entry in testgen.config.toml", field),
                "Remove the file to fall back to auto-detection".into(),
            ],
            Self::MissingField { field } => vec![
                format!("Add '{}' to testgen.config.toml", field),
                "Run: testgen config generate --force to rewrite the file".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
            ],
            Self::UnknownProjectType(_) => vec![
                "Supported project types: react, vue, angular, nodejs, dotnet".into(),
            ],
            Self::UnknownFramework(_) => vec![
                "Supported frameworks: jest, vitest, mocha, jasmine, xunit, nunit, mstest".into(),
            ],
            Self::UnknownTestType(_) => vec![
                "Supported test types: component, function, class, hook, utility".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Unknown names are typed by the user, so they are input errors.
            Self::InvalidConfig { .. }
            | Self::MissingField { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UnknownProjectType(_)
            | Self::UnknownFramework(_)
            | Self::UnknownTestType(_) => ErrorCategory::Validation,
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
    fn missing_field_suggests_adding_it() {
        let err = DomainError::MissingField {
            field: "testing_framework",
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("testing_framework"))
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unknown_names_are_validation_errors() {
        let err = DomainError::UnknownFramework("ava".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            DomainError::UnknownProjectType("svelte".into()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(err.to_string(), "unknown testing framework: ava");
    }
}
