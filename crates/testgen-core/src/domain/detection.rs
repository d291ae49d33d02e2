//! Detection results.
//!
//! Both types are produced fresh per invocation and never mutated after
//! construction; they are plain data handed to the config resolver and the
//! prompt layer.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{ProjectType, TestingFramework};

/// Outcome of testing-framework detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub framework: TestingFramework,
    pub project_type: ProjectType,

    /// Framework config file found at the root (relative name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,

    /// Dedicated test directory. `None` means tests are co-located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_directory: Option<String>,

    /// Declared version-spec of the winning framework, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Companion-library flags; only reported for Jest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl DetectionResult {
    /// A bare result with no enrichment.
    pub fn new(framework: TestingFramework, project_type: ProjectType) -> Self {
        Self {
            framework,
            project_type,
            config_file: None,
            test_directory: None,
            version: None,
            capabilities: None,
        }
    }

    /// True when neither classifier found anything.
    pub fn is_inconclusive(&self) -> bool {
        !self.framework.is_known()
    }
}

/// Auxiliary testing libraries found beside the framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub react_testing_library: bool,
    pub testing_library: bool,
}

/// Project-level layout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedProject {
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_directory: Option<String>,
    pub has_typescript: bool,
    pub has_react: bool,
    pub has_vue: bool,
    pub has_angular: bool,
}

/// Editor found by its marker directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ide {
    Cursor,
    #[serde(rename = "vscode")]
    VsCode,
    #[serde(rename = "jetbrains")]
    JetBrains,
    Codeium,
    Unknown,
}

impl Ide {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::VsCode => "vscode",
            Self::JetBrains => "jetbrains",
            Self::Codeium => "codeium",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Ide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
