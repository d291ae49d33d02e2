//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use testgen_core::application::{ApplicationError, ports::ProjectFilesystem};
use testgen_core::error::TestgenResult;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after passing one to a
/// service. Ancestors of every inserted path are directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Files that exist but fail on read.
    unreadable: BTreeSet<PathBuf>,
    /// Directories whose walk fails outright.
    failing_walks: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.directories.insert(ancestor.to_path_buf());
            }
        }
    }

    fn add_file(&mut self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path.to_path_buf(), content.to_string());
    }
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a file (and its parent directories).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_file(path.as_ref(), content);
        }
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir(path.as_ref());
        }
        self
    }

    /// Builder: a file that is listed and walked but cannot be read.
    pub fn with_unreadable_file(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_file(path.as_ref(), "");
            inner.unreadable.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builder: walking exactly this directory fails.
    pub fn with_failing_walk(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_walks.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read_guard(
        &self,
    ) -> TestgenResult<std::sync::RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write_guard(
        &self,
    ) -> TestgenResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

fn not_found(path: &Path, reason: &str) -> testgen_core::error::TestgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl ProjectFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> TestgenResult<String> {
        let inner = self.read_guard()?;
        if inner.unreadable.contains(path) {
            return Err(not_found(path, "Permission denied"));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "No such file"))
    }

    fn read_dir(&self, path: &Path) -> TestgenResult<Vec<String>> {
        let inner = self.read_guard()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Not a directory"));
        }

        let names: BTreeSet<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names.into_iter().collect())
    }

    fn walk_files(&self, path: &Path) -> TestgenResult<Vec<PathBuf>> {
        let inner = self.read_guard()?;
        if inner.failing_walks.contains(path) || !inner.directories.contains(path) {
            return Err(not_found(path, "Walk failed"));
        }

        // BTreeMap order is component-wise path order.
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(path))
            .cloned()
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> TestgenResult<()> {
        self.write_guard()?.add_dir(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TestgenResult<()> {
        let mut inner = self.write_guard()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
