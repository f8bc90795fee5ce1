//! Natural-language advice generation
//!
//! The backend treats the language model as an opaque remote function: it
//! receives a structured prompt and returns free-form advice text. Any
//! failure (disabled, HTTP error, bad status, empty reply, timeout) is
//! reported as an [`LlmError`] and the caller substitutes
//! [`fallback_advice`].

use crate::config::LlmConfig;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

mod openai;
mod prompt;

pub use openai::OpenAiAdviceClient;
pub use prompt::{fallback_advice, AdvicePrompt, SYSTEM_PROMPT};

/// Errors from the advice generator
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM advice generation is disabled")]
    Disabled,

    #[error("LLM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("LLM response contained no advice text")]
    EmptyResponse,

    #[error("LLM request timed out after {0} seconds")]
    Timeout(u64),
}

/// Produces advice text for a prompt
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Generate advice text for the prompt
    async fn generate(&self, prompt: &AdvicePrompt) -> Result<String, LlmError>;
}

/// Generator used when the LLM is turned off in configuration
pub struct DisabledAdviceGenerator;

#[async_trait]
impl AdviceGenerator for DisabledAdviceGenerator {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn generate(&self, _prompt: &AdvicePrompt) -> Result<String, LlmError> {
        Err(LlmError::Disabled)
    }
}

/// Build the configured advice generator
pub fn generator_from_config(config: &LlmConfig) -> Result<Arc<dyn AdviceGenerator>, LlmError> {
    if !config.enabled {
        info!("LLM advice disabled, fallback advice will be used");
        return Ok(Arc::new(DisabledAdviceGenerator));
    }

    let client = OpenAiAdviceClient::new(config)?;
    info!(
        base_url = %config.base_url,
        model = %config.model,
        "LLM advice client initialized"
    );
    Ok(Arc::new(client))
}
