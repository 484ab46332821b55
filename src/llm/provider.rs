use async_trait::async_trait;
use crate::errors::NicolError;
use super::types::LLMResponse;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-form text completion
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, NicolError>;

    /// Display label used when combining answers ("Gemini", "OpenAI", "AI/ML")
    fn label(&self) -> &str;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
