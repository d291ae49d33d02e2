//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::domain::{PromptKey, RawProjectConfig, ResolvedConfig};
use crate::error::TestgenResult;

/// Port for project-tree access.
///
/// Implemented by:
/// - `testgen_adapters::filesystem::LocalFilesystem` (production)
/// - `testgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are passed as the caller built them (`root.join(...)`)
/// - Probes (`exists`, `is_dir`) swallow errors and answer `false`
/// - Detection only reads; the two write methods serve `init` and
///   config generation
#[cfg_attr(test, mockall::automock)]
pub trait ProjectFilesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> TestgenResult<String>;

    /// Names of the immediate entries of a directory, sorted.
    fn read_dir(&self, path: &Path) -> TestgenResult<Vec<String>>;

    /// Every regular file below `path`, recursively, sorted by path.
    fn walk_files(&self, path: &Path) -> TestgenResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TestgenResult<()>;

    fn write_file(&self, path: &Path, content: &str) -> TestgenResult<()>;
}

/// Port for the project config file format.
///
/// Implemented by `testgen_adapters::config_loader::TomlConfigCodec`.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigCodec: Send + Sync {
    /// Stage 1 of the load: text to raw shape. `path` is for error context.
    fn parse(&self, path: &Path, text: &str) -> TestgenResult<RawProjectConfig>;

    fn render(&self, config: &ResolvedConfig) -> TestgenResult<String>;
}

/// Port for prompt template text.
///
/// Implemented by `testgen_adapters::prompts::BuiltinPromptCatalog`.
pub trait PromptCatalog: Send + Sync {
    fn template(&self, key: PromptKey) -> TestgenResult<String>;

    fn keys(&self) -> Vec<PromptKey>;
}
