//! Command handlers.
//!
//! Each handler turns parsed arguments into calls on the core services and
//! renders the result. No detection logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use testgen_adapters::{BuiltinPromptCatalog, LocalFilesystem, TomlConfigCodec};
use testgen_core::application::{
    ConfigResolver, FrameworkDetector, IdeDetector, ProjectDetector, PromptCatalog,
    ProjectFilesystem, TestScriptLocator,
};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod detect;
pub mod init;
pub mod prompt;
pub mod run;

/// Adapters bound to one project root.
pub struct ProjectContext {
    root: PathBuf,
    filesystem: Arc<dyn ProjectFilesystem>,
}

impl ProjectContext {
    /// Fails with `RootNotFound` unless `root` is a directory.
    pub fn open(root: &Path) -> CliResult<Self> {
        let filesystem: Arc<dyn ProjectFilesystem> = Arc::new(LocalFilesystem::new());
        Self::with_filesystem(root, filesystem)
    }

    pub fn with_filesystem(root: &Path, filesystem: Arc<dyn ProjectFilesystem>) -> CliResult<Self> {
        if !filesystem.is_dir(root) {
            return Err(CliError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
            filesystem,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filesystem(&self) -> &Arc<dyn ProjectFilesystem> {
        &self.filesystem
    }

    pub fn config_resolver(&self) -> ConfigResolver {
        ConfigResolver::new(
            self.root.clone(),
            Arc::clone(&self.filesystem),
            Arc::new(TomlConfigCodec::new()),
        )
    }

    pub fn framework_detector(&self) -> FrameworkDetector {
        FrameworkDetector::new(Arc::clone(&self.filesystem))
    }

    pub fn project_detector(&self) -> ProjectDetector {
        ProjectDetector::new(Arc::clone(&self.filesystem))
    }

    pub fn ide_detector(&self) -> IdeDetector {
        IdeDetector::new(Arc::clone(&self.filesystem))
    }

    pub fn test_scripts(&self) -> TestScriptLocator {
        TestScriptLocator::new(Arc::clone(&self.filesystem))
    }
}

/// Prompt templates: the app-config directory, else `TESTGEN_PROMPTS_DIR`,
/// else the built-in set.
pub fn prompt_catalog(config: &AppConfig) -> CliResult<Arc<dyn PromptCatalog>> {
    match &config.prompts.dir {
        Some(dir) if !dir.is_dir() => Err(CliError::ConfigError {
            message: format!("prompts.dir '{}' is not a directory", dir.display()),
            source: None,
        }),
        Some(dir) => Ok(Arc::new(BuiltinPromptCatalog::with_override_dir(dir))),
        None => Ok(Arc::new(BuiltinPromptCatalog::from_env())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_adapters::MemoryFilesystem;

    #[test]
    fn missing_root_is_reported() {
        let fs: Arc<dyn ProjectFilesystem> = Arc::new(MemoryFilesystem::new());
        let err = ProjectContext::with_filesystem(Path::new("/nowhere"), fs)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::RootNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn context_keeps_root() {
        let fs: Arc<dyn ProjectFilesystem> = Arc::new(MemoryFilesystem::new().with_dir("/p"));
        let ctx = ProjectContext::with_filesystem(Path::new("/p"), fs).unwrap();
        assert_eq!(ctx.root(), Path::new("/p"));
        assert_eq!(ctx.config_resolver().root(), Path::new("/p"));
    }

    #[test]
    fn prompt_dir_must_exist() {
        let mut config = AppConfig::default();
        config.prompts.dir = Some(PathBuf::from("/definitely/not/here"));
        assert!(matches!(
            prompt_catalog(&config),
            Err(CliError::ConfigError { .. })
        ));
    }
}
