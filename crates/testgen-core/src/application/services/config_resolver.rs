//! Config Resolver - explicit file, else auto-detection, memoized.
//!
//! ```text
//! uninitialized ──► testgen.config.toml valid? ──yes──► from file (cached)
//!                          │ no / absent
//!                          ▼
//!             ProjectDetector + FrameworkDetector ──► synthesized (cached)
//! ```
//!
//! A malformed file (TOML syntax, unknown key, missing required field,
//! invalid path) is logged and treated exactly like an absent one. The
//! cache is filled once per instance and never invalidated.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::{ConfigCodec, ProjectFilesystem};
use crate::application::services::{FrameworkDetector, ProjectDetector};
use crate::domain::registry::CONFIG_FILE_NAME;
use crate::domain::{
    ConfigOverrides, ConfigSource, DotNetConfig, FrameworkConfig, JestConfig, ResolvedConfig,
    TestingFramework, VitestConfig,
};
use crate::error::TestgenResult;

pub struct ConfigResolver {
    root: PathBuf,
    filesystem: Arc<dyn ProjectFilesystem>,
    codec: Arc<dyn ConfigCodec>,
    projects: ProjectDetector,
    frameworks: FrameworkDetector,
    cached: OnceLock<(ResolvedConfig, ConfigSource)>,
}

impl ConfigResolver {
    pub fn new(
        root: impl Into<PathBuf>,
        filesystem: Arc<dyn ProjectFilesystem>,
        codec: Arc<dyn ConfigCodec>,
    ) -> Self {
        Self {
            root: root.into(),
            projects: ProjectDetector::new(Arc::clone(&filesystem)),
            frameworks: FrameworkDetector::new(Arc::clone(&filesystem)),
            filesystem,
            codec,
            cached: OnceLock::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn has_config_file(&self) -> bool {
        self.filesystem.exists(&self.config_path())
    }

    /// The resolved config. Resolution runs on the first call only; later
    /// calls return the same reference even if the tree has changed.
    pub fn get_config(&self) -> &ResolvedConfig {
        &self.resolved().0
    }

    /// Where [`Self::get_config`]'s values came from. Forces resolution.
    pub fn source(&self) -> &ConfigSource {
        &self.resolved().1
    }

    fn resolved(&self) -> &(ResolvedConfig, ConfigSource) {
        self.cached.get_or_init(|| match self.load_file() {
            Ok(Some(config)) => {
                info!(path = %self.config_path().display(), "Using project config file");
                (config, ConfigSource::File(self.config_path()))
            }
            Ok(None) => {
                debug!("No project config file, auto-detecting");
                (self.auto_detect(), ConfigSource::AutoDetected)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring invalid project config file, auto-detecting");
                (self.auto_detect(), ConfigSource::AutoDetected)
            }
        })
    }

    /// Both load stages, uncached. `Ok(None)` means no file exists.
    pub fn load_file(&self) -> TestgenResult<Option<ResolvedConfig>> {
        let path = self.config_path();
        if !self.filesystem.exists(&path) {
            return Ok(None);
        }

        let text = self.filesystem.read_to_string(&path)?;
        let raw = self.codec.parse(&path, &text)?;
        Ok(Some(raw.validate()?))
    }

    /// Synthesize a config from detection alone, uncached.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn auto_detect(&self) -> ResolvedConfig {
        let project = self.projects.detect(&self.root);
        let detection = self.frameworks.detect(&self.root);

        let mut framework_config = FrameworkConfig::default();
        match detection.framework {
            TestingFramework::Jest => {
                framework_config.jest =
                    Some(JestConfig::with_default_match(detection.config_file.clone()));
            }
            TestingFramework::Vitest => {
                framework_config.vitest = Some(VitestConfig {
                    config_file: detection.config_file.clone(),
                });
            }
            TestingFramework::XUnit => {
                framework_config.xunit =
                    Some(DotNetConfig::new(detection.test_directory.as_deref()));
            }
            TestingFramework::NUnit => {
                framework_config.nunit =
                    Some(DotNetConfig::new(detection.test_directory.as_deref()));
            }
            TestingFramework::Mocha
            | TestingFramework::Jasmine
            | TestingFramework::MsTest
            | TestingFramework::Unknown => {}
        }

        ResolvedConfig {
            project_type: project.project_type,
            testing_framework: detection.framework,
            test_directory: project.test_directory.or(detection.test_directory),
            source_directory: project.source_directory,
            framework_config,
        }
    }

    /// The current config with `overrides` applied, as config-file text.
    pub fn render_config_file(&self, overrides: &ConfigOverrides) -> TestgenResult<String> {
        let config = self.get_config().clone().with_overrides(overrides);
        self.codec.render(&config)
    }

    /// Write [`Self::render_config_file`] to `testgen.config.toml`.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    #[instrument(skip_all, fields(root = %self.root.display(), force = force))]
    pub fn generate_config_file(
        &self,
        overrides: &ConfigOverrides,
        force: bool,
    ) -> TestgenResult<PathBuf> {
        let path = self.config_path();
        if !force && self.filesystem.exists(&path) {
            return Err(ApplicationError::ConfigExists { path }.into());
        }

        let text = self.render_config_file(overrides)?;
        self.filesystem.write_file(&path, &text)?;
        info!(path = %path.display(), "Config file written");
        Ok(path)
    }
}
