//! Shared context for share commands
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::core::ShareConfig;
use crate::features::share::{NoPrompt, ReqwestTransport, SharePrompt, WebhookTransport};

/// Services a share command needs: configuration, the webhook transport and
/// the prompt used for optional questions.
#[derive(Clone)]
pub struct ShareContext {
    pub config: ShareConfig,
    pub transport: Arc<dyn WebhookTransport>,
    pub prompt: Arc<dyn SharePrompt>,
}

impl ShareContext {
    pub fn new(
        config: ShareConfig,
        transport: Arc<dyn WebhookTransport>,
        prompt: Arc<dyn SharePrompt>,
    ) -> Self {
        Self {
            config,
            transport,
            prompt,
        }
    }

    /// reqwest transport, terminal prompts when the `prompt` feature is on
    pub fn with_defaults(config: ShareConfig) -> Self {
        Self::new(config, Arc::new(ReqwestTransport::new()), default_prompt())
    }
}

#[cfg(feature = "prompt")]
fn default_prompt() -> Arc<dyn SharePrompt> {
    Arc::new(crate::features::share::TerminalPrompt)
}

#[cfg(not(feature = "prompt"))]
fn default_prompt() -> Arc<dyn SharePrompt> {
    Arc::new(NoPrompt)
}

impl std::fmt::Debug for ShareContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareContext")
            .field("mode", &self.config.mode)
            .finish_non_exhaustive()
    }
}

/// Context that never prompts; used when prompts are disabled
pub fn non_interactive(config: ShareConfig) -> ShareContext {
    ShareContext::new(config, Arc::new(ReqwestTransport::new()), Arc::new(NoPrompt))
}
