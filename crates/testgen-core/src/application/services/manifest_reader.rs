//! Manifest Reader - tolerant `package.json` loading.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::ports::ProjectFilesystem;
use crate::domain::manifest::{self, MANIFEST_FILE};
use crate::domain::Manifest;

/// Loads the dependency manifest of a project root.
///
/// Never fails: a missing, unreadable or malformed manifest is reported as
/// an empty record.
#[derive(Clone)]
pub struct ManifestReader {
    filesystem: Arc<dyn ProjectFilesystem>,
}

impl ManifestReader {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn read(&self, root: &Path) -> Manifest {
        let manifest = self.load(root, Manifest::parse).unwrap_or_default();
        debug!(dependencies = manifest.len(), "Manifest read");
        manifest
    }

    /// The `scripts` table, with the same tolerance as [`Self::read`].
    pub fn read_scripts(&self, root: &Path) -> BTreeMap<String, String> {
        self.load(root, manifest::parse_scripts).unwrap_or_default()
    }

    fn load<T>(
        &self,
        root: &Path,
        parse: impl FnOnce(&str) -> Result<T, serde_json::Error>,
    ) -> Option<T> {
        let path = root.join(MANIFEST_FILE);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "No manifest");
            return None;
        }

        let text = match self.filesystem.read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Manifest unreadable, treating as empty");
                return None;
            }
        };

        match parse(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed manifest, treating as empty");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockProjectFilesystem;
    use crate::application::ApplicationError;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    fn reader(mock: MockProjectFilesystem) -> ManifestReader {
        ManifestReader::new(Arc::new(mock))
    }

    #[test]
    fn missing_manifest_is_never_read() {
        let mut fs = MockProjectFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();

        assert!(reader(fs).read(Path::new("/p")).is_empty());
    }

    #[test]
    fn read_failure_yields_empty_record() {
        let mut fs = MockProjectFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        assert!(reader(fs).read(Path::new("/p")).is_empty());
    }

    #[test]
    fn manifest_is_read_from_root() {
        let mut fs = MockProjectFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/p/package.json")))
            .return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"devDependencies":{"vitest":"^1.6.0"}}"#.into()));

        let manifest = reader(fs).read(Path::new("/p"));
        assert_eq!(manifest.version_of("vitest"), Some("^1.6.0"));
    }

    #[test]
    fn malformed_scripts_yield_empty_table() {
        let mut fs = MockProjectFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|_| Ok("{,}".into()));

        assert!(reader(fs).read_scripts(Path::new("/p")).is_empty());
    }
}
