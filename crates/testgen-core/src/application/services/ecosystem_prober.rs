//! Ecosystem Prober - is this a .NET project?

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::ProjectFilesystem;
use crate::domain::registry::DOTNET_MARKER_SUFFIX;

#[derive(Clone)]
pub struct EcosystemProber {
    filesystem: Arc<dyn ProjectFilesystem>,
}

impl EcosystemProber {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self { filesystem }
    }

    /// True if an immediate entry of `root` names a `.csproj` file.
    ///
    /// Non-recursive. A listing failure answers `false`.
    pub fn has_non_js_marker(&self, root: &Path) -> bool {
        match self.filesystem.read_dir(root) {
            Ok(entries) => {
                let found = entries
                    .iter()
                    .any(|name| name.ends_with(DOTNET_MARKER_SUFFIX));
                debug!(root = %root.display(), found, "Probed for .csproj marker");
                found
            }
            Err(e) => {
                debug!(root = %root.display(), error = %e, "Root not listable");
                false
            }
        }
    }
}
