//! Application services.
//!
//! Each service owns a handle to the filesystem port and takes the project
//! root per call.

pub mod config_resolver;
pub mod directory_resolver;
pub mod ecosystem_prober;
pub mod framework_detector;
pub mod ide_detector;
pub mod manifest_reader;
pub mod project_detector;
pub mod prompt_service;
pub mod test_script;

pub use config_resolver::ConfigResolver;
pub use directory_resolver::DirectoryResolver;
pub use ecosystem_prober::EcosystemProber;
pub use framework_detector::FrameworkDetector;
pub use ide_detector::IdeDetector;
pub use manifest_reader::ManifestReader;
pub use project_detector::ProjectDetector;
pub use prompt_service::{PromptService, RenderedPrompt};
pub use test_script::{TestScript, TestScriptLocator};

/// In-crate synthetic project tree for service tests.
#[cfg(test)]
pub(crate) mod fixture {
    use std::collections::{BTreeMap, BTreeSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::application::ApplicationError;
    use crate::application::ports::ProjectFilesystem;
    use crate::error::TestgenResult;

    pub const ROOT: &str = "/p";

    #[derive(Default)]
    struct Tree {
        /// `None` content means the file exists but cannot be read.
        files: BTreeMap<PathBuf, Option<String>>,
        dirs: BTreeSet<PathBuf>,
        failing_walks: BTreeSet<PathBuf>,
    }

    /// Builder over paths relative to [`ROOT`].
    #[derive(Default)]
    pub struct FakeTree {
        tree: Mutex<Tree>,
    }

    impl FakeTree {
        pub fn new() -> Self {
            let fake = Self::default();
            fake.lock().dirs.insert(PathBuf::from(ROOT));
            fake
        }

        pub fn file(self, rel: &str, content: &str) -> Self {
            self.insert_file(rel, Some(content.to_string()));
            self
        }

        pub fn unreadable(self, rel: &str) -> Self {
            self.insert_file(rel, None);
            self
        }

        pub fn dir(self, rel: &str) -> Self {
            self.insert_dir(&Path::new(ROOT).join(rel));
            self
        }

        pub fn failing_walk(self, abs: &str) -> Self {
            self.lock().failing_walks.insert(PathBuf::from(abs));
            self
        }

        pub fn into_port(self) -> Arc<dyn ProjectFilesystem> {
            Arc::new(self)
        }

        /// Mutate a tree that is already shared with a service.
        pub fn add_file(&self, rel: &str, content: &str) {
            self.insert_file(rel, Some(content.to_string()));
        }

        pub fn file_content(&self, rel: &str) -> Option<String> {
            self.lock()
                .files
                .get(&Path::new(ROOT).join(rel))
                .cloned()
                .flatten()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, Tree> {
            self.tree.lock().unwrap()
        }

        fn insert_file(&self, rel: &str, content: Option<String>) {
            let path = Path::new(ROOT).join(rel);
            if let Some(parent) = path.parent() {
                self.insert_dir(parent);
            }
            self.lock().files.insert(path, content);
        }

        fn insert_dir(&self, path: &Path) {
            let mut tree = self.lock();
            for ancestor in path.ancestors() {
                tree.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn io_error(path: &Path, reason: &str) -> crate::error::TestgenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }

    impl ProjectFilesystem for FakeTree {
        fn exists(&self, path: &Path) -> bool {
            let tree = self.lock();
            tree.files.contains_key(path) || tree.dirs.contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.lock().dirs.contains(path)
        }

        fn read_to_string(&self, path: &Path) -> TestgenResult<String> {
            match self.lock().files.get(path) {
                Some(Some(content)) => Ok(content.clone()),
                Some(None) => Err(io_error(path, "permission denied")),
                None => Err(io_error(path, "not found")),
            }
        }

        fn read_dir(&self, path: &Path) -> TestgenResult<Vec<String>> {
            let tree = self.lock();
            if !tree.dirs.contains(path) {
                return Err(io_error(path, "not a directory"));
            }
            let names: BTreeSet<String> = tree
                .files
                .keys()
                .chain(tree.dirs.iter())
                .filter(|p| p.parent() == Some(path))
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            Ok(names.into_iter().collect())
        }

        fn walk_files(&self, path: &Path) -> TestgenResult<Vec<PathBuf>> {
            let tree = self.lock();
            if tree.failing_walks.contains(path) || !tree.dirs.contains(path) {
                return Err(io_error(path, "walk failed"));
            }
            Ok(tree
                .files
                .keys()
                .filter(|p| p.starts_with(path))
                .cloned()
                .collect())
        }

        fn create_dir_all(&self, path: &Path) -> TestgenResult<()> {
            self.insert_dir(path);
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> TestgenResult<()> {
            if let Some(parent) = path.parent() {
                self.insert_dir(parent);
            }
            self.lock()
                .files
                .insert(path.to_path_buf(), Some(content.to_string()));
            Ok(())
        }
    }
}
