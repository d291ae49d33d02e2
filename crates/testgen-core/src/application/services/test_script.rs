//! Test-script locator.

use std::path::Path;
use std::sync::Arc;

use crate::application::ports::ProjectFilesystem;
use crate::application::services::ManifestReader;
use crate::domain::registry::TEST_SCRIPT_NAMES;

/// A `package.json` script that runs tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScript {
    pub name: String,
    pub command: String,
}

#[derive(Clone)]
pub struct TestScriptLocator {
    manifests: ManifestReader,
}

impl TestScriptLocator {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self {
            manifests: ManifestReader::new(filesystem),
        }
    }

    /// First of `test`, `test:unit`, `test:watch`, `test:coverage` with a
    /// non-empty command.
    pub fn locate(&self, root: &Path) -> Option<TestScript> {
        let scripts = self.manifests.read_scripts(root);
        TEST_SCRIPT_NAMES.iter().find_map(|name| {
            scripts
                .get(*name)
                .filter(|command| !command.is_empty())
                .map(|command| TestScript {
                    name: name.to_string(),
                    command: command.clone(),
                })
        })
    }
}
