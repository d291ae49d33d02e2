//! Built-in prompt catalog.
//!
//! Templates ship inside the binary. A directory of `<key>.md` files can
//! shadow individual templates:
//!
//! 1. **`$TESTGEN_PROMPTS_DIR`**, when set and present
//! 2. the compiled-in text
//!
//! A missing or unreadable override file falls back silently (with a
//! `DEBUG` log) to the built-in text.

use std::path::PathBuf;

use tracing::{debug, warn};

use testgen_core::application::ports::PromptCatalog;
use testgen_core::domain::PromptKey;
use testgen_core::error::TestgenResult;

/// Environment variable naming an override directory.
pub const PROMPTS_DIR_ENV: &str = "TESTGEN_PROMPTS_DIR";

fn builtin(key: PromptKey) -> &'static str {
    match key {
        PromptKey::JestReact => include_str!("../../prompts/jest-react.md"),
        PromptKey::JestNode => include_str!("../../prompts/jest-node.md"),
        PromptKey::Vitest => include_str!("../../prompts/vitest.md"),
        PromptKey::Mocha => include_str!("../../prompts/mocha.md"),
        PromptKey::Jasmine => include_str!("../../prompts/jasmine.md"),
        PromptKey::XUnitDotNet => include_str!("../../prompts/xunit-dotnet.md"),
        PromptKey::NUnitDotNet => include_str!("../../prompts/nunit-dotnet.md"),
        PromptKey::MsTest => include_str!("../../prompts/mstest.md"),
        PromptKey::Generic => include_str!("../../prompts/generic.md"),
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuiltinPromptCatalog {
    override_dir: Option<PathBuf>,
}

impl BuiltinPromptCatalog {
    /// Compiled-in templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Honour `$TESTGEN_PROMPTS_DIR` if it names an existing directory.
    pub fn from_env() -> Self {
        let override_dir = std::env::var_os(PROMPTS_DIR_ENV)
            .map(PathBuf::from)
            .filter(|dir| {
                let usable = dir.is_dir();
                if !usable {
                    warn!(dir = %dir.display(), "{PROMPTS_DIR_ENV} is not a directory, ignoring");
                }
                usable
            });
        Self { override_dir }
    }

    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    fn read_override(&self, key: PromptKey) -> Option<String> {
        let path = self.override_dir.as_ref()?.join(format!("{key}.md"));
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "Using prompt override");
                Some(text)
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No prompt override");
                None
            }
        }
    }
}

impl PromptCatalog for BuiltinPromptCatalog {
    fn template(&self, key: PromptKey) -> TestgenResult<String> {
        Ok(self
            .read_override(key)
            .unwrap_or_else(|| builtin(key).to_string()))
    }

    fn keys(&self) -> Vec<PromptKey> {
        PromptKey::ALL.to_vec()
    }
}
