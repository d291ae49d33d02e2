//! Core domain layer for testgen.
//!
//! Pure classification logic: every decision the detector makes lives here
//! as a function of already-gathered evidence. All I/O goes through the
//! ports in `crate::application`.
//!
//! ## Layout
//!
//! - `registry`: static, ordered marker tables (the priority rules)
//! - `classification`: pure classifiers over those tables
//! - `manifest`: the merged dependency record
//! - `detection`, `config`, `prompt`: result and config shapes

pub mod classification;
pub mod config;
pub mod detection;
pub mod error;
pub mod manifest;
pub mod prompt;
pub mod registry;
pub mod value_objects;

pub use classification::{
    classify_project_type, framework_from_build_file, framework_from_config_files,
    framework_from_dependencies,
};
pub use config::{
    ConfigOverrides, ConfigSource, DotNetConfig, FrameworkConfig, JestConfig, RawProjectConfig,
    ResolvedConfig, VitestConfig,
};
pub use detection::{Capabilities, DetectedProject, DetectionResult, Ide};
pub use error::{DomainError, ErrorCategory};
pub use manifest::Manifest;
pub use prompt::{PromptContext, PromptKey, PromptRequest, TestTarget, TestType, default_scenarios};
pub use registry::{AliasSet, FrameworkDef};
pub use value_objects::{ProjectType, TestingFramework};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module rules
    // ========================================================================

    #[test]
    fn marker_wins_even_with_jest_installed() {
        let manifest: Manifest = [("react", "^18"), ("jest", "^29")].into_iter().collect();

        let project_type = classify_project_type(&manifest, true);
        assert_eq!(project_type, ProjectType::DotNet);
        // The JS classifiers still see jest; only the caller decides to skip them.
        assert!(framework_from_dependencies(&manifest).is_some());
    }

    #[test]
    fn dependency_evidence_beats_config_files() {
        let manifest: Manifest = [("mocha", "10")].into_iter().collect();

        let winner = framework_from_dependencies(&manifest)
            .or_else(|| framework_from_config_files(|f| f == "jest.config.js"));
        assert_eq!(winner.map(|d| d.framework), Some(TestingFramework::Mocha));
    }

    #[test]
    fn detected_pair_selects_prompt() {
        let manifest: Manifest = [("react", "^18"), ("jest", "^29")].into_iter().collect();
        let project_type = classify_project_type(&manifest, false);
        let framework = framework_from_dependencies(&manifest)
            .map_or(TestingFramework::Unknown, |d| d.framework);

        assert_eq!(PromptKey::select(framework, project_type), PromptKey::JestReact);
    }
}
