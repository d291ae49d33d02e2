//! Domain value objects: ProjectType, TestingFramework.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO detection logic. All alias sets and marker lists live in
//! `registry.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a registry entry in `registry.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of project found at a root.
///
/// Exactly one value is produced per detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    React,
    Vue,
    Angular,
    #[serde(rename = "nodejs")]
    NodeJs,
    #[serde(rename = "dotnet")]
    DotNet,
    Unknown,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::NodeJs => "nodejs",
            Self::DotNet => "dotnet",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this project lives in the JavaScript/TypeScript ecosystem.
    ///
    /// `Unknown` counts as JS: without a `.csproj` marker the JS conventions
    /// (co-located tests, `src/` default) apply.
    pub const fn is_js(self) -> bool {
        !matches!(self, Self::DotNet)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            "nodejs" | "node" => Ok(Self::NodeJs),
            "dotnet" | ".net" => Ok(Self::DotNet),
            "unknown" => Ok(Self::Unknown),
            other => Err(DomainError::UnknownProjectType(other.to_string())),
        }
    }
}

// ── TestingFramework ──────────────────────────────────────────────────────────

/// A testing framework, JS or .NET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestingFramework {
    Jest,
    Vitest,
    Mocha,
    Jasmine,
    #[serde(rename = "xunit")]
    XUnit,
    #[serde(rename = "nunit")]
    NUnit,
    #[serde(rename = "mstest")]
    MsTest,
    Unknown,
}

impl TestingFramework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jest => "jest",
            Self::Vitest => "vitest",
            Self::Mocha => "mocha",
            Self::Jasmine => "jasmine",
            Self::XUnit => "xunit",
            Self::NUnit => "nunit",
            Self::MsTest => "mstest",
            Self::Unknown => "unknown",
        }
    }

    /// .NET frameworks are only ever produced by the build-file sub-resolver.
    pub const fn is_dotnet(self) -> bool {
        matches!(self, Self::XUnit | Self::NUnit | Self::MsTest)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TestingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestingFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jest" => Ok(Self::Jest),
            "vitest" => Ok(Self::Vitest),
            "mocha" => Ok(Self::Mocha),
            "jasmine" => Ok(Self::Jasmine),
            "xunit" => Ok(Self::XUnit),
            "nunit" => Ok(Self::NUnit),
            "mstest" => Ok(Self::MsTest),
            "unknown" => Ok(Self::Unknown),
            other => Err(DomainError::UnknownFramework(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parses_aliases() {
        assert_eq!(ProjectType::from_str("React").unwrap(), ProjectType::React);
        assert_eq!(ProjectType::from_str("node").unwrap(), ProjectType::NodeJs);
        assert_eq!(ProjectType::from_str(".NET").unwrap(), ProjectType::DotNet);
        assert!(ProjectType::from_str("svelte").is_err());
    }

    #[test]
    fn dotnet_frameworks_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&TestingFramework::XUnit).unwrap(),
            "\"xunit\""
        );
        assert_eq!(
            serde_json::to_string(&TestingFramework::MsTest).unwrap(),
            "\"mstest\""
        );
        assert!(TestingFramework::from_str("ava").is_err());
    }

    #[test]
    fn project_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&ProjectType::NodeJs).unwrap(),
            "\"nodejs\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectType::DotNet).unwrap(),
            "\"dotnet\""
        );
    }

    #[test]
    fn only_dotnet_is_non_js() {
        assert!(!ProjectType::DotNet.is_js());
        assert!(ProjectType::Unknown.is_js());
        assert!(TestingFramework::MsTest.is_dotnet());
        assert!(!TestingFramework::Jest.is_dotnet());
    }
}
