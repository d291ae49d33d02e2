//! Prompt Service - template selection and rendering.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ports::PromptCatalog;
use crate::domain::{
    PromptContext, PromptKey, PromptRequest, ResolvedConfig, TestTarget, TestingFramework,
};
use crate::error::TestgenResult;

/// A prompt ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub key: PromptKey,
    pub text: String,
}

pub struct PromptService {
    catalog: Arc<dyn PromptCatalog>,
}

impl PromptService {
    pub fn new(catalog: Arc<dyn PromptCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve a request against the config: `auto` uses the detected
    /// pair, bare `jest` picks the React or Node template by project type.
    pub fn select(request: PromptRequest, config: &ResolvedConfig) -> PromptKey {
        match request {
            PromptRequest::Key(key) => key,
            PromptRequest::Jest => PromptKey::select(TestingFramework::Jest, config.project_type),
            PromptRequest::Auto => PromptKey::select(config.testing_framework, config.project_type),
        }
    }

    #[instrument(skip_all, fields(key = %key))]
    pub fn render(
        &self,
        key: PromptKey,
        config: &ResolvedConfig,
        target: &TestTarget,
    ) -> TestgenResult<RenderedPrompt> {
        let template = self.catalog.template(key)?;
        let text = PromptContext::from_config(config)
            .with_target(key, target)
            .render(&template);
        debug!(bytes = text.len(), "Prompt rendered");
        Ok(RenderedPrompt { key, text })
    }

    /// [`Self::select`] then [`Self::render`].
    pub fn render_request(
        &self,
        request: PromptRequest,
        config: &ResolvedConfig,
        target: &TestTarget,
    ) -> TestgenResult<RenderedPrompt> {
        self.render(Self::select(request, config), config, target)
    }

    pub fn available(&self) -> Vec<PromptKey> {
        self.catalog.keys()
    }
}
