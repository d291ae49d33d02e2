//! TOML codec for `testgen.config.toml`.
//!
//! # Format
//!
//! ```toml
//! project_type      = "react"      # react | vue | angular | nodejs | dotnet | unknown
//! testing_framework = "jest"       # jest | vitest | mocha | jasmine | xunit | nunit | mstest
//! test_directory    = "__tests__"  # optional, relative
//! source_directory  = "src"        # optional, relative
//!
//! [framework_config.jest]          # optional per-framework blocks
//! config_file = "jest.config.ts"
//! test_match  = ["**/*.test.*"]
//!
//! [framework_config.xunit]
//! namespace      = "Tests"
//! test_directory = "Tests"
//! ```
//!
//! Unknown keys anywhere are rejected at parse time.

use std::path::Path;

use tracing::debug;

use testgen_core::application::{ApplicationError, ports::ConfigCodec};
use testgen_core::domain::{RawProjectConfig, ResolvedConfig};
use testgen_core::error::TestgenResult;

const HEADER: &str = "# testgen project configuration\n\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigCodec;

impl TomlConfigCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigCodec for TomlConfigCodec {
    fn parse(&self, path: &Path, text: &str) -> TestgenResult<RawProjectConfig> {
        let raw: RawProjectConfig = toml::from_str(text).map_err(|e| ApplicationError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        debug!(path = %path.display(), "Parsed project config");
        Ok(raw)
    }

    fn render(&self, config: &ResolvedConfig) -> TestgenResult<String> {
        let body = toml::to_string_pretty(config).map_err(|e| {
            ApplicationError::SerializationFailed {
                reason: e.to_string(),
            }
        })?;
        Ok(format!("{HEADER}{body}"))
    }
}
