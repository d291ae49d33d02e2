//! Application layer errors.
//!
//! These errors represent failures at the ports, not classification rules.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project config text could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Refusing to overwrite an existing config file.
    #[error("Config file already exists at {path}")]
    ConfigExists { path: PathBuf },

    #[error("Failed to serialize config: {reason}")]
    SerializationFailed { reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// No template registered for a key.
    #[error("No prompt template named '{name}'")]
    PromptNotFound { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "Unknown keys are rejected; check spelling".into(),
            ],
            Self::ConfigExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
            ],
            Self::PromptNotFound { .. } => vec![
                "Available: jest-react, jest-node, vitest, mocha, jasmine, xunit-dotnet, nunit-dotnet, mstest, generic".into(),
            ],
            Self::SerializationFailed { .. } | Self::LockPoisoned => {
                vec!["Check the error details above".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. }
            | Self::SerializationFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::ConfigExists { .. } => ErrorCategory::Validation,
            Self::PromptNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
