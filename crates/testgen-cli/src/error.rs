//! Errors surfaced by the binary.
//!
//! Core errors are wrapped transparently so their message, cause chain and
//! suggestions reach the user unchanged. Every variant maps to a category,
//! and the category to the process exit code.

use std::error::Error as _;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use testgen_core::domain::ProjectType;
use testgen_core::error::{ErrorCategory as CoreCategory, TestgenError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Could not auto-detect a testing framework ({project_type} project)")]
    FrameworkNotDetected { project_type: ProjectType },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] TestgenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.kind().to_string(),
            source: err,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UserError => "user",
            Self::NotFound => "not_found",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotFound { path } => vec![
                format!("'{}' is not a directory", path.display()),
                "Pass the project directory with --root <DIR>".into(),
            ],
            Self::FrameworkNotDetected { .. } => vec![
                "Name the framework explicitly: testgen prompt <framework>".into(),
                "Available: jest, jest-react, jest-node, vitest, mocha, jasmine, xunit, nunit, mstest"
                    .into(),
                "Or pin it in testgen.config.toml: testgen config generate --framework jest".into(),
            ],
            Self::ConfigError { .. } => vec![format!(
                "Check the application config at {}",
                crate::config::AppConfig::config_path().display()
            )],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check permissions on the project directory".into()],
            Self::Cancelled => vec!["No changes were made".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootNotFound { .. } | Self::FrameworkNotDetected { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Text written to stderr. `verbose` adds the cause chain; `colored`
    /// adds ANSI styling and nothing else.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = Paint(colored);
        let mut out = String::new();

        let _ = writeln!(out, "\n{} {self}", paint.error("error:"));

        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        if verbose {
            for cause in &causes {
                let _ = writeln!(out, "  {} {cause}", paint.dim("caused by:"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint.hint("help:"));
            for suggestion in &suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }

        if !verbose && !causes.is_empty() {
            let _ = writeln!(out, "\n{}", paint.dim("Re-run with -v / --verbose to see the cause."));
        }
        out
    }

    pub fn log(&self) {
        let category = self.category();
        let exit_code = category.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = category.label(), exit_code, error = %self, "Command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = category.label(), exit_code, error = %self, "Command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Underlying cause");
        }
    }
}

struct Paint(bool);

impl Paint {
    fn error(&self, s: &str) -> String {
        if self.0 { s.red().bold().to_string() } else { s.to_string() }
    }

    fn hint(&self, s: &str) -> String {
        if self.0 { s.yellow().bold().to_string() } else { s.to_string() }
    }

    fn dim(&self, s: &str) -> String {
        if self.0 { s.dimmed().to_string() } else { s.to_string() }
    }
}
