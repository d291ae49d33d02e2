//! Project Detector - project-level layout summary.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::ProjectFilesystem;
use crate::application::services::{DirectoryResolver, EcosystemProber, ManifestReader};
use crate::domain::registry::{PROJECT_TYPE_REGISTRY, TYPESCRIPT_CONFIG_FILES};
use crate::domain::{DetectedProject, Manifest, ProjectType, classify_project_type};

#[derive(Clone)]
pub struct ProjectDetector {
    filesystem: Arc<dyn ProjectFilesystem>,
    manifests: ManifestReader,
    prober: EcosystemProber,
    directories: DirectoryResolver,
}

impl ProjectDetector {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self {
            manifests: ManifestReader::new(Arc::clone(&filesystem)),
            prober: EcosystemProber::new(Arc::clone(&filesystem)),
            directories: DirectoryResolver::new(Arc::clone(&filesystem)),
            filesystem,
        }
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn detect(&self, root: &Path) -> DetectedProject {
        let manifest = self.manifests.read(root);
        let project_type = classify_project_type(&manifest, self.prober.has_non_js_marker(root));

        let project = DetectedProject {
            project_type,
            source_directory: self.directories.resolve_source_directory(root, project_type),
            test_directory: self.directories.resolve_test_directory(root, project_type),
            has_typescript: TYPESCRIPT_CONFIG_FILES
                .iter()
                .any(|file| self.filesystem.exists(&root.join(file))),
            has_react: declares(&manifest, ProjectType::React),
            has_vue: declares(&manifest, ProjectType::Vue),
            has_angular: declares(&manifest, ProjectType::Angular),
        };

        info!(project_type = %project.project_type, "Project detected");
        project
    }
}

/// Dependency evidence for a type, independent of which type won.
fn declares(manifest: &Manifest, project_type: ProjectType) -> bool {
    PROJECT_TYPE_REGISTRY
        .iter()
        .find(|def| def.project_type == project_type)
        .is_some_and(|def| def.aliases.matches(manifest))
}
