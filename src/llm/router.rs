use std::sync::Arc;

use crate::config::Config;
use super::aiml::AimlProvider;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;

/// The fixed fan-out set, in the order their answers are combined.
pub fn create_providers(config: &Config) -> Vec<Arc<dyn LLMProvider>> {
    vec![
        Arc::new(GeminiProvider::new(&config.gemini_key, Some(&config.gemini_model))),
        Arc::new(OpenAIProvider::new(&config.openai_key, Some(&config.openai_model))),
        Arc::new(AimlProvider::new(&config.aiml_key, Some(&config.aiml_model))),
    ]
}

/// The provider that writes the final summary. Gemini, for speed.
pub fn create_finalizer(config: &Config) -> Arc<dyn LLMProvider> {
    Arc::new(GeminiProvider::new(&config.gemini_key, Some(&config.gemini_model)))
}
