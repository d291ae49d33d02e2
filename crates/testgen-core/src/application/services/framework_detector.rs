//! Framework Detector - testing framework classification with enrichment.
//!
//! Evidence is gathered through the filesystem port and handed to the pure
//! classifiers in `crate::domain::classification`:
//!
//! 1. a `.csproj` marker routes to the .NET sub-resolver, which scans
//!    build-file text and never answers `unknown`
//! 2. otherwise dependency aliases, then root config files, decide
//! 3. only the winner is enriched (config file, test dir, version, libraries)

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::ProjectFilesystem;
use crate::application::services::{DirectoryResolver, EcosystemProber, ManifestReader};
use crate::domain::registry::{
    DOTNET_DEFAULT_FRAMEWORK, DOTNET_MARKER_SUFFIX, DOTNET_TEST_DIRECTORIES, JS_TEST_DIRECTORIES,
    REACT_TESTING_LIBRARY, TESTING_LIBRARY, TestDirectoryPolicy,
};
use crate::domain::{
    Capabilities, DetectionResult, FrameworkDef, Manifest, ProjectType, TestingFramework,
    classify_project_type, framework_from_build_file, framework_from_config_files,
    framework_from_dependencies,
};

#[derive(Clone)]
pub struct FrameworkDetector {
    filesystem: Arc<dyn ProjectFilesystem>,
    manifests: ManifestReader,
    prober: EcosystemProber,
    directories: DirectoryResolver,
}

impl FrameworkDetector {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self {
            manifests: ManifestReader::new(Arc::clone(&filesystem)),
            prober: EcosystemProber::new(Arc::clone(&filesystem)),
            directories: DirectoryResolver::new(Arc::clone(&filesystem)),
            filesystem,
        }
    }

    /// Gather all evidence under `root` and classify.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn detect(&self, root: &Path) -> DetectionResult {
        let manifest = self.manifests.read(root);
        let has_marker = self.prober.has_non_js_marker(root);
        let project_type = classify_project_type(&manifest, has_marker);

        let result = self.classify_testing_framework(root, &manifest, has_marker, project_type);
        info!(
            framework = %result.framework,
            project_type = %result.project_type,
            "Testing framework detected"
        );
        result
    }

    /// Classify from pre-gathered evidence; the filesystem is consulted only
    /// for config-file presence, build files and enrichment.
    pub fn classify_testing_framework(
        &self,
        root: &Path,
        manifest: &Manifest,
        has_non_js_marker: bool,
        project_type: ProjectType,
    ) -> DetectionResult {
        if has_non_js_marker {
            let framework = self.resolve_dotnet_framework(root);
            let mut result = DetectionResult::new(framework, project_type);
            if matches!(framework, TestingFramework::XUnit | TestingFramework::NUnit) {
                result.test_directory = self
                    .directories
                    .resolve_test_directory(root, ProjectType::DotNet);
            }
            return result;
        }

        let winner = framework_from_dependencies(manifest).or_else(|| {
            debug!("No framework dependency, checking config files");
            framework_from_config_files(|file| self.filesystem.exists(&root.join(file)))
        });

        match winner {
            Some(def) => self.enrich(root, manifest, def, project_type),
            None => DetectionResult::new(TestingFramework::Unknown, project_type),
        }
    }

    fn enrich(
        &self,
        root: &Path,
        manifest: &Manifest,
        def: &FrameworkDef,
        project_type: ProjectType,
    ) -> DetectionResult {
        let mut result = DetectionResult::new(def.framework, project_type);

        result.config_file = def
            .reported_config_files
            .iter()
            .find(|file| self.filesystem.exists(&root.join(file)))
            .map(|file| file.to_string());

        if def.test_directory == TestDirectoryPolicy::Conventional {
            result.test_directory = self
                .directories
                .first_existing(root, JS_TEST_DIRECTORIES)
                .map(str::to_string);
        }

        result.version = def.version_aliases.version(manifest).map(str::to_string);

        if def.reports_testing_library {
            result.capabilities = Some(Capabilities {
                react_testing_library: REACT_TESTING_LIBRARY.matches(manifest),
                testing_library: TESTING_LIBRARY.matches(manifest),
            });
        }

        result
    }

    /// Scan `.csproj` text: the whole tree first, then each conventional
    /// test directory. Falls back to xUnit.
    fn resolve_dotnet_framework(&self, root: &Path) -> TestingFramework {
        let from_root = match self.filesystem.walk_files(root) {
            Ok(files) => self.scan_build_files(&files),
            Err(e) => {
                debug!(error = %e, "Walk of project root failed");
                None
            }
        };

        from_root
            .or_else(|| {
                DOTNET_TEST_DIRECTORIES
                    .iter()
                    .map(|dir| root.join(dir))
                    .filter(|dir| self.filesystem.is_dir(dir))
                    .find_map(|dir| match self.filesystem.walk_files(&dir) {
                        Ok(files) => self.scan_build_files(&files),
                        Err(e) => {
                            debug!(dir = %dir.display(), error = %e, "Walk failed");
                            None
                        }
                    })
            })
            .unwrap_or_else(|| {
                debug!("No framework marker in any build file, assuming default");
                DOTNET_DEFAULT_FRAMEWORK
            })
    }

    fn scan_build_files(&self, files: &[PathBuf]) -> Option<TestingFramework> {
        files
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(OsStr::to_str)
                    .is_some_and(|name| name.ends_with(DOTNET_MARKER_SUFFIX))
            })
            .find_map(|path| match self.filesystem.read_to_string(path) {
                Ok(text) => {
                    let found = framework_from_build_file(&text);
                    debug!(file = %path.display(), ?found, "Scanned build file");
                    found
                }
                Err(e) => {
                    debug!(file = %path.display(), error = %e, "Skipping unreadable build file");
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixture::FakeTree;

    fn detect(tree: FakeTree) -> DetectionResult {
        FrameworkDetector::new(tree.into_port()).detect(Path::new("/p"))
    }

    #[test]
    fn jest_dependency_beats_vitest_config() {
        let result = detect(
            FakeTree::new()
                .file("package.json", r#"{"devDependencies":{"jest":"^29.7.0"}}"#)
                .file("vitest.config.ts", "export default {}"),
        );

        assert_eq!(result.framework, TestingFramework::Jest);
        assert_eq!(result.version.as_deref(), Some("^29.7.0"));
        assert_eq!(result.config_file, None);
    }

    #[test]
    fn jest_is_fully_enriched() {
        let result = detect(
            FakeTree::new()
                .file(
                    "package.json",
                    r#"{
                        "dependencies": {"react": "^18.2.0"},
                        "devDependencies": {
                            "@jest/globals": "29.1.0",
                            "@testing-library/react": "^14.0.0"
                        }
                    }"#,
                )
                .file("jest.config.mjs", "export default {}")
                .dir("test")
                .dir("spec"),
        );

        assert_eq!(result.framework, TestingFramework::Jest);
        assert_eq!(result.project_type, ProjectType::React);
        assert_eq!(result.config_file.as_deref(), Some("jest.config.mjs"));
        assert_eq!(result.test_directory.as_deref(), Some("test"));
        assert_eq!(result.version.as_deref(), Some("29.1.0"));
        assert_eq!(
            result.capabilities,
            Some(Capabilities {
                react_testing_library: true,
                testing_library: true,
            })
        );
    }

    #[test]
    fn vite_config_is_reported_for_vitest() {
        let result = detect(
            FakeTree::new()
                .file("package.json", r#"{"devDependencies":{"vitest":"^1.6.0","vue":"^3"}}"#)
                .file("vite.config.ts", ""),
        );

        assert_eq!(result.framework, TestingFramework::Vitest);
        assert_eq!(result.project_type, ProjectType::Vue);
        assert_eq!(result.config_file.as_deref(), Some("vite.config.ts"));
        assert!(result.capabilities.is_none());
    }

    #[test]
    fn vitest_config_without_dependency() {
        let result = detect(
            FakeTree::new()
                .file("package.json", r#"{"dependencies":{"express":"^4"}}"#)
                .file("vitest.config.ts", ""),
        );

        assert_eq!(result.framework, TestingFramework::Vitest);
        assert_eq!(result.project_type, ProjectType::NodeJs);
        assert_eq!(result.config_file.as_deref(), Some("vitest.config.ts"));
        assert_eq!(result.version, None);
    }

    #[test]
    fn mocha_gets_no_enrichment() {
        let result = detect(
            FakeTree::new()
                .file("package.json", r#"{"devDependencies":{"mocha":"^10"}}"#)
                .dir("test"),
        );

        assert_eq!(result, DetectionResult::new(TestingFramework::Mocha, ProjectType::Unknown));
    }

    #[test]
    fn empty_project_is_inconclusive() {
        let result = detect(FakeTree::new());
        assert!(result.is_inconclusive());
        assert_eq!(result.project_type, ProjectType::Unknown);
    }

    #[test]
    fn dotnet_defaults_to_xunit() {
        let result = detect(FakeTree::new().file("App.csproj", "<Project />"));

        assert_eq!(result.framework, TestingFramework::XUnit);
        assert_eq!(result.project_type, ProjectType::DotNet);
        assert_eq!(result.test_directory.as_deref(), Some("Tests"));
    }

    #[test]
    fn nested_nunit_project_is_found() {
        let result = detect(
            FakeTree::new()
                .file("App.csproj", "<Project Sdk=\"Microsoft.NET.Sdk\" />")
                .file(
                    "tests/App.Tests.csproj",
                    r#"<PackageReference Include="NUnit" Version="3.14.0" />"#,
                ),
        );

        assert_eq!(result.framework, TestingFramework::NUnit);
        assert_eq!(result.test_directory.as_deref(), Some("tests"));
    }

    #[test]
    fn unreadable_build_file_is_skipped() {
        let result = detect(
            FakeTree::new()
                .file("App.csproj", "")
                .unreadable("a/Broken.csproj")
                .file("b/Tests.csproj", "<PackageReference Include=\"MSTest.TestFramework\" />"),
        );

        assert_eq!(result.framework, TestingFramework::MsTest);
        assert_eq!(result.test_directory, None);
    }

    #[test]
    fn failed_root_walk_falls_back_to_test_directories() {
        let result = detect(
            FakeTree::new()
                .file("App.csproj", "")
                .file("Test/Unit.csproj", "<PackageReference Include=\"nunit\" />")
                .failing_walk("/p"),
        );

        assert_eq!(result.framework, TestingFramework::NUnit);
        assert_eq!(result.test_directory.as_deref(), Some("Test"));
    }
}
