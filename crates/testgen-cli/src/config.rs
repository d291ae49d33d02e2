//! Application configuration.
//!
//! [`AppConfig`] holds user preferences for the binary itself (colours,
//! output format, default prompt). It is separate from the per-project
//! `testgen.config.toml`, which the core crate resolves.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `TESTGEN_*` environment variables, `__` between sections
//!    (`TESTGEN_OUTPUT__NO_COLOR=true`)
//! 3. Config file (`--config FILE`, or the per-user config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub output: OutputConfig,
    pub prompts: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Prompt name used when `testgen prompt` gets no argument.
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is auto.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Directory whose `<key>.md` files replace the built-in templates.
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                prompt: "auto".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            prompts: PromptConfig::default(),
        }
    }
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("TESTGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Per-user config file, falling back to `.testgen.toml` in the
    /// current directory when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "testgen", "testgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".testgen.toml"))
    }

    /// The configured output format, if it names a concrete one.
    pub fn preferred_format(&self) -> Option<OutputFormat> {
        match self.output.format.to_ascii_lowercase().as_str() {
            "human" => Some(OutputFormat::Human),
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_prompt_is_auto() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.prompt, "auto");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.preferred_format(), None);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.defaults, AppConfig::default().defaults);
    }

    #[test]
    fn file_overrides_selected_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\nprompt = \"vitest\"\n\n[output]\nformat = \"plain\"\n")
            .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.prompt, "vitest");
        assert_eq!(cfg.preferred_format(), Some(OutputFormat::Plain));
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.prompts.dir, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
