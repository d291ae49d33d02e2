//! IDE marker sniffer.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::ProjectFilesystem;
use crate::domain::Ide;
use crate::domain::registry::IDE_MARKERS;

#[derive(Clone)]
pub struct IdeDetector {
    filesystem: Arc<dyn ProjectFilesystem>,
}

impl IdeDetector {
    pub fn new(filesystem: Arc<dyn ProjectFilesystem>) -> Self {
        Self { filesystem }
    }

    /// First marker present under `root`. Informational only; nothing
    /// downstream changes with the answer.
    pub fn detect(&self, root: &Path) -> Ide {
        let ide = IDE_MARKERS
            .iter()
            .find(|(marker, _)| self.filesystem.exists(&root.join(marker)))
            .map_or(Ide::Unknown, |(_, ide)| *ide);
        debug!(ide = %ide, "IDE probe");
        ide
    }
}
