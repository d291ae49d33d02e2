//! Resolved project configuration and its two-stage load.
//!
//! ```text
//! testgen.config.toml ──► RawProjectConfig ──validate()──► ResolvedConfig
//!      (stage 1: shape, unknown keys rejected)   (stage 2: semantics)
//! ```
//!
//! The raw shape is all-optional so that "field present but wrong" and
//! "field missing" are told apart in stage 2 and reported as distinct
//! [`DomainError`]s. A config is either fully loaded from the file or fully
//! synthesized from detection; the two are never merged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::registry::{DOTNET_DEFAULT_NAMESPACE, DOTNET_DEFAULT_TEST_DIRECTORY, JEST_DEFAULT_TEST_MATCH};
use crate::domain::value_objects::{ProjectType, TestingFramework};

// ── Resolved shape ───────────────────────────────────────────────────────────

/// The final configuration consumed by the prompt layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub project_type: ProjectType,
    pub testing_framework: TestingFramework,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,
    #[serde(default, skip_serializing_if = "FrameworkConfig::is_empty")]
    pub framework_config: FrameworkConfig,
}

/// Per-framework option blocks. At most the winning framework's block is
/// filled when the config is synthesized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jest: Option<JestConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitest: Option<VitestConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xunit: Option<DotNetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nunit: Option<DotNetConfig>,
}

impl FrameworkConfig {
    pub fn is_empty(&self) -> bool {
        self.jest.is_none() && self.vitest.is_none() && self.xunit.is_none() && self.nunit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub test_match: Vec<String>,
}

impl JestConfig {
    pub fn with_default_match(config_file: Option<String>) -> Self {
        Self {
            config_file,
            test_match: JEST_DEFAULT_TEST_MATCH.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

/// Shared by xUnit and NUnit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotNetConfig {
    pub namespace: String,
    pub test_directory: String,
}

impl DotNetConfig {
    pub fn new(test_directory: Option<&str>) -> Self {
        Self {
            namespace: DOTNET_DEFAULT_NAMESPACE.to_string(),
            test_directory: test_directory
                .unwrap_or(DOTNET_DEFAULT_TEST_DIRECTORY)
                .to_string(),
        }
    }
}

/// Where the cached config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    AutoDetected,
}

impl ConfigSource {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::AutoDetected => f.write_str("auto-detected"),
        }
    }
}

/// Top-level fields that replace the current config's values when a config
/// file is generated. Nested blocks are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub project_type: Option<ProjectType>,
    pub testing_framework: Option<TestingFramework>,
    pub test_directory: Option<String>,
    pub source_directory: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ResolvedConfig {
    /// Shallow override: each `Some` replaces the field wholesale.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(project_type) = overrides.project_type {
            self.project_type = project_type;
        }
        if let Some(framework) = overrides.testing_framework {
            self.testing_framework = framework;
        }
        if let Some(dir) = &overrides.test_directory {
            self.test_directory = Some(dir.clone());
        }
        if let Some(dir) = &overrides.source_directory {
            self.source_directory = Some(dir.clone());
        }
        self
    }
}

// ── Raw (stage 1) shape ──────────────────────────────────────────────────────

/// Exactly what the file says. Unknown keys are a stage-1 failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProjectConfig {
    pub project_type: Option<ProjectType>,
    pub testing_framework: Option<TestingFramework>,
    pub test_directory: Option<String>,
    pub source_directory: Option<String>,
    pub framework_config: Option<RawFrameworkConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFrameworkConfig {
    pub jest: Option<RawJestConfig>,
    pub vitest: Option<RawVitestConfig>,
    pub xunit: Option<RawDotNetConfig>,
    pub nunit: Option<RawDotNetConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawJestConfig {
    pub config_file: Option<String>,
    pub test_match: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVitestConfig {
    pub config_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDotNetConfig {
    pub namespace: Option<String>,
    pub test_directory: Option<String>,
}

impl RawProjectConfig {
    /// Stage 2. Fails on the first violated rule.
    pub fn validate(self) -> Result<ResolvedConfig, DomainError> {
        let project_type = self.project_type.ok_or(DomainError::MissingField {
            field: "project_type",
        })?;
        let testing_framework = self.testing_framework.ok_or(DomainError::MissingField {
            field: "testing_framework",
        })?;

        let test_directory = self
            .test_directory
            .map(|dir| relative_path("test_directory", dir))
            .transpose()?;
        let source_directory = self
            .source_directory
            .map(|dir| relative_path("source_directory", dir))
            .transpose()?;

        let framework_config = match self.framework_config {
            Some(raw) => raw.validate()?,
            None => FrameworkConfig::default(),
        };

        Ok(ResolvedConfig {
            project_type,
            testing_framework,
            test_directory,
            source_directory,
            framework_config,
        })
    }
}

impl RawFrameworkConfig {
    fn validate(self) -> Result<FrameworkConfig, DomainError> {
        let jest = self
            .jest
            .map(|raw| -> Result<_, DomainError> {
                let config_file = raw
                    .config_file
                    .map(|file| relative_path("framework_config.jest.config_file", file))
                    .transpose()?;
                Ok(match raw.test_match {
                    Some(test_match) => JestConfig {
                        config_file,
                        test_match,
                    },
                    None => JestConfig::with_default_match(config_file),
                })
            })
            .transpose()?;

        let vitest = self
            .vitest
            .map(|raw| -> Result<_, DomainError> {
                Ok(VitestConfig {
                    config_file: raw
                        .config_file
                        .map(|file| relative_path("framework_config.vitest.config_file", file))
                        .transpose()?,
                })
            })
            .transpose()?;

        let xunit = self.xunit.map(|raw| raw.validate("xunit")).transpose()?;
        let nunit = self.nunit.map(|raw| raw.validate("nunit")).transpose()?;

        Ok(FrameworkConfig {
            jest,
            vitest,
            xunit,
            nunit,
        })
    }
}

impl RawDotNetConfig {
    fn validate(self, block: &str) -> Result<DotNetConfig, DomainError> {
        let namespace = match self.namespace {
            Some(ns) if ns.trim().is_empty() => {
                return Err(DomainError::InvalidConfig {
                    field: format!("framework_config.{block}.namespace"),
                    reason: "namespace must not be empty".into(),
                });
            }
            Some(ns) => ns,
            None => DOTNET_DEFAULT_NAMESPACE.to_string(),
        };

        let test_directory = match self.test_directory {
            Some(dir) => relative_path(&format!("framework_config.{block}.test_directory"), dir)?,
            None => DOTNET_DEFAULT_TEST_DIRECTORY.to_string(),
        };

        Ok(DotNetConfig {
            namespace,
            test_directory,
        })
    }
}

/// Accept a non-empty path that stays relative to the project root.
fn relative_path(field: &str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidConfig {
            field: field.to_string(),
            reason: "path must not be empty".into(),
        });
    }

    // `Path::is_absolute` is platform-specific; a leading separator or drive
    // letter is rejected everywhere.
    let has_drive = value.as_bytes().get(1) == Some(&b':');
    if Path::new(&value).is_absolute() || value.starts_with(['/', '\\']) || has_drive {
        return Err(DomainError::AbsolutePathNotAllowed { path: value });
    }

    if value.split(['/', '\\']).any(|part| part == "..") {
        return Err(DomainError::InvalidConfig {
            field: field.to_string(),
            reason: format!("'{value}' leaves the project root"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(project_type: Option<ProjectType>, framework: Option<TestingFramework>) -> RawProjectConfig {
        RawProjectConfig {
            project_type,
            testing_framework: framework,
            ..Default::default()
        }
    }

    #[test]
    fn minimal_config_validates() {
        let config = raw(Some(ProjectType::Vue), Some(TestingFramework::Vitest))
            .validate()
            .unwrap();

        assert_eq!(config.project_type, ProjectType::Vue);
        assert_eq!(config.testing_framework, TestingFramework::Vitest);
        assert!(config.framework_config.is_empty());
    }

    #[test]
    fn missing_required_fields_are_reported_by_name() {
        assert_eq!(
            raw(None, Some(TestingFramework::Jest)).validate(),
            Err(DomainError::MissingField {
                field: "project_type"
            })
        );
        assert_eq!(
            raw(Some(ProjectType::React), None).validate(),
            Err(DomainError::MissingField {
                field: "testing_framework"
            })
        );
    }

    #[test]
    fn absolute_directories_are_rejected() {
        for path in ["/srv/tests", "\\tests", "C:\\tests"] {
            let mut config = raw(Some(ProjectType::React), Some(TestingFramework::Jest));
            config.test_directory = Some(path.into());
            assert!(
                matches!(
                    config.validate(),
                    Err(DomainError::AbsolutePathNotAllowed { .. })
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn parent_segments_are_rejected() {
        for path in ["../../outside", "tests/../../x", "..\\up", ".."] {
            let mut config = raw(Some(ProjectType::React), Some(TestingFramework::Jest));
            config.test_directory = Some(path.into());
            assert!(
                matches!(
                    config.validate(),
                    Err(DomainError::InvalidConfig { ref field, .. }) if field == "test_directory"
                ),
                "{path} should be rejected"
            );
        }

        let mut dotted = raw(Some(ProjectType::React), Some(TestingFramework::Jest));
        dotted.test_directory = Some("tests/..fixtures".into());
        assert!(dotted.validate().is_ok());
    }

    #[test]
    fn empty_source_directory_is_invalid() {
        let mut config = raw(Some(ProjectType::React), Some(TestingFramework::Jest));
        config.source_directory = Some("  ".into());
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfig { field, .. }) if field == "source_directory"
        ));
    }

    #[test]
    fn empty_namespace_is_invalid() {
        let mut config = raw(Some(ProjectType::DotNet), Some(TestingFramework::NUnit));
        config.framework_config = Some(RawFrameworkConfig {
            nunit: Some(RawDotNetConfig {
                namespace: Some(String::new()),
                test_directory: None,
            }),
            ..Default::default()
        });

        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfig { field, .. }) if field == "framework_config.nunit.namespace"
        ));
    }

    #[test]
    fn partial_blocks_take_block_defaults() {
        let mut config = raw(Some(ProjectType::DotNet), Some(TestingFramework::XUnit));
        config.framework_config = Some(RawFrameworkConfig {
            xunit: Some(RawDotNetConfig::default()),
            jest: Some(RawJestConfig::default()),
            ..Default::default()
        });

        let resolved = config.validate().unwrap().framework_config;
        assert_eq!(resolved.xunit, Some(DotNetConfig::new(None)));
        assert_eq!(
            resolved.jest.unwrap().test_match,
            vec!["**/__tests__/**/*", "**/*.test.*", "**/*.spec.*"]
        );
    }

    #[test]
    fn overrides_replace_top_level_fields_only() {
        let base = ResolvedConfig {
            project_type: ProjectType::React,
            testing_framework: TestingFramework::Jest,
            test_directory: None,
            source_directory: Some("src".into()),
            framework_config: FrameworkConfig {
                jest: Some(JestConfig::with_default_match(None)),
                ..Default::default()
            },
        };

        let overridden = base.clone().with_overrides(&ConfigOverrides {
            testing_framework: Some(TestingFramework::Vitest),
            test_directory: Some("spec".into()),
            ..Default::default()
        });

        assert_eq!(overridden.testing_framework, TestingFramework::Vitest);
        assert_eq!(overridden.test_directory.as_deref(), Some("spec"));
        assert_eq!(overridden.source_directory.as_deref(), Some("src"));
        assert_eq!(overridden.framework_config, base.framework_config);
    }

    #[test]
    fn config_source_display() {
        assert_eq!(ConfigSource::AutoDetected.to_string(), "auto-detected");
        assert!(ConfigSource::File("testgen.config.toml".into()).is_file());
    }
}
