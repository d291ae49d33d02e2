//! Pure classification rules.
//!
//! Nothing here touches the filesystem: callers gather the evidence
//! (manifest, marker probe, config-file presence, build-file text) and these
//! functions apply the priority tables in `registry.rs`. First match wins;
//! ties are impossible because every table is totally ordered.

use crate::domain::manifest::Manifest;
use crate::domain::registry::{
    DOTNET_FRAMEWORK_MARKERS, FrameworkDef, JS_FRAMEWORK_REGISTRY, PROJECT_TYPE_REGISTRY,
};
use crate::domain::value_objects::{ProjectType, TestingFramework};

/// Classify the project type.
///
/// A `.csproj` marker overrides all dependency evidence.
pub fn classify_project_type(manifest: &Manifest, has_non_js_marker: bool) -> ProjectType {
    if has_non_js_marker {
        return ProjectType::DotNet;
    }

    PROJECT_TYPE_REGISTRY
        .iter()
        .find(|def| def.aliases.matches(manifest))
        .map_or(ProjectType::Unknown, |def| def.project_type)
}

/// First JS framework whose dependency aliases are declared.
pub fn framework_from_dependencies(manifest: &Manifest) -> Option<&'static FrameworkDef> {
    JS_FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.dependency_aliases.matches(manifest))
}

/// First JS framework with a detection config file that `exists` reports.
///
/// Frameworks are tried in registry order, files in list order.
pub fn framework_from_config_files(
    mut exists: impl FnMut(&str) -> bool,
) -> Option<&'static FrameworkDef> {
    JS_FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.detection_config_files.iter().any(|&file| exists(file)))
}

/// Scan one build file's text for a .NET framework marker.
///
/// Case-insensitive; markers are tried in priority order, so a file naming
/// both xUnit and NUnit yields xUnit.
pub fn framework_from_build_file(content: &str) -> Option<TestingFramework> {
    let haystack = content.to_ascii_lowercase();
    DOTNET_FRAMEWORK_MARKERS
        .iter()
        .find(|(marker, _)| haystack.contains(marker))
        .map(|(_, framework)| *framework)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(deps: &[&str]) -> Manifest {
        deps.iter().map(|d| (*d, "1.0.0")).collect()
    }

    // ── classify_project_type ─────────────────────────────────────────────

    #[test]
    fn marker_overrides_ui_dependencies() {
        let m = manifest(&["react", "vue", "express"]);
        assert_eq!(classify_project_type(&m, true), ProjectType::DotNet);
    }

    #[test]
    fn react_dom_alone_is_react() {
        assert_eq!(
            classify_project_type(&manifest(&["react-dom"]), false),
            ProjectType::React
        );
    }

    #[test]
    fn ui_framework_outranks_server_framework() {
        let m = manifest(&["express", "@angular/core"]);
        assert_eq!(classify_project_type(&m, false), ProjectType::Angular);
    }

    #[test]
    fn vue_outranks_angular() {
        let m = manifest(&["@angular/core", "@vue/core"]);
        assert_eq!(classify_project_type(&m, false), ProjectType::Vue);
    }

    #[test]
    fn koa_is_nodejs() {
        assert_eq!(
            classify_project_type(&manifest(&["koa"]), false),
            ProjectType::NodeJs
        );
    }

    #[test]
    fn no_evidence_is_unknown() {
        assert_eq!(
            classify_project_type(&manifest(&["lodash"]), false),
            ProjectType::Unknown
        );
        assert_eq!(
            classify_project_type(&Manifest::empty(), false),
            ProjectType::Unknown
        );
    }

    // ── framework_from_dependencies ───────────────────────────────────────

    #[test]
    fn jest_outranks_every_other_framework() {
        let m = manifest(&["jasmine", "mocha", "vitest", "jest"]);
        assert_eq!(
            framework_from_dependencies(&m).map(|d| d.framework),
            Some(TestingFramework::Jest)
        );
    }

    #[test]
    fn jest_globals_counts_as_jest() {
        let m = manifest(&["@jest/globals"]);
        assert_eq!(
            framework_from_dependencies(&m).map(|d| d.framework),
            Some(TestingFramework::Jest)
        );
    }

    #[test]
    fn jasmine_core_counts_as_jasmine() {
        let m = manifest(&["jasmine-core"]);
        assert_eq!(
            framework_from_dependencies(&m).map(|d| d.framework),
            Some(TestingFramework::Jasmine)
        );
    }

    #[test]
    fn mocha_outranks_jasmine() {
        let m = manifest(&["jasmine", "mocha"]);
        assert_eq!(
            framework_from_dependencies(&m).map(|d| d.framework),
            Some(TestingFramework::Mocha)
        );
    }

    // ── framework_from_config_files ───────────────────────────────────────

    #[test]
    fn jest_config_outranks_vitest_config() {
        let found = framework_from_config_files(|f| f == "vitest.config.js" || f == "jest.config.json");
        assert_eq!(found.map(|d| d.framework), Some(TestingFramework::Jest));
    }

    #[test]
    fn vite_config_is_not_detection_evidence() {
        assert!(framework_from_config_files(|f| f == "vite.config.ts").is_none());
    }

    #[test]
    fn mjs_jest_config_is_not_detection_evidence() {
        assert!(framework_from_config_files(|f| f == "jest.config.mjs").is_none());
    }

    // ── framework_from_build_file ─────────────────────────────────────────

    #[test]
    fn build_file_match_is_case_insensitive() {
        let csproj = r#"<PackageReference Include="NUnit" Version="3.14.0" />"#;
        assert_eq!(framework_from_build_file(csproj), Some(TestingFramework::NUnit));
    }

    #[test]
    fn xunit_wins_when_several_markers_present() {
        let csproj = r#"
            <PackageReference Include="MSTest.TestFramework" />
            <PackageReference Include="xunit" />
            <PackageReference Include="NUnit" />
        "#;
        assert_eq!(framework_from_build_file(csproj), Some(TestingFramework::XUnit));
    }

    #[test]
    fn mstest_is_found() {
        let csproj = r#"<PackageReference Include="MSTest.TestAdapter" />"#;
        assert_eq!(framework_from_build_file(csproj), Some(TestingFramework::MsTest));
    }

    #[test]
    fn plain_build_file_has_no_marker() {
        let csproj = r#"<Project Sdk="Microsoft.NET.Sdk"><PropertyGroup /></Project>"#;
        assert_eq!(framework_from_build_file(csproj), None);
    }
}
