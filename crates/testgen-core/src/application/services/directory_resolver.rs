//! Directory Resolver - conventional test and source directories.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::ProjectFilesystem;
use crate::domain::registry::{
    DEFAULT_SOURCE_DIRECTORY, DOTNET_DEFAULT_TEST_DIRECTORY, DOTNET_TEST_DIRECTORIES,
    JS_TEST_DIRECTORIES, SOURCE_DIRECTORIES,
};
use crate::domain::ProjectType;

/// Read-only lookups; nothing is ever created.
#[derive(Clone)]
pub struct DirectoryResolver {
    filesystem: Arc<dyn ProjectFilesystem>,
}

impl DirectoryResolver {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self { filesystem }
    }

    /// `.NET` always gets a recommendation; other types may co-locate tests.
    pub fn resolve_test_directory(&self, root: &Path, project_type: ProjectType) -> Option<String> {
        if project_type == ProjectType::DotNet {
            let dir = self
                .first_existing(root, DOTNET_TEST_DIRECTORIES)
                .unwrap_or(DOTNET_DEFAULT_TEST_DIRECTORY);
            return Some(dir.to_string());
        }

        self.first_existing(root, JS_TEST_DIRECTORIES)
            .map(str::to_string)
    }

    pub fn resolve_source_directory(
        &self,
        root: &Path,
        project_type: ProjectType,
    ) -> Option<String> {
        match self.first_existing(root, SOURCE_DIRECTORIES) {
            Some(dir) => Some(dir.to_string()),
            None if project_type == ProjectType::DotNet => None,
            None => Some(DEFAULT_SOURCE_DIRECTORY.to_string()),
        }
    }

    /// First candidate that exists under `root` as a directory.
    pub fn first_existing(&self, root: &Path, candidates: &[&'static str]) -> Option<&'static str> {
        let found = candidates
            .iter()
            .copied()
            .find(|dir| self.filesystem.is_dir(&root.join(dir)));
        debug!(root = %root.display(), ?found, "Resolved directory");
        found
    }
}
