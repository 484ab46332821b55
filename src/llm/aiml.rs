use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use crate::errors::NicolError;
use super::openai::ChatCompletionResponse;
use super::provider::LLMProvider;
use super::types::LLMResponse;

/// AI/ML API speaks the OpenAI chat completions dialect on its own host.
pub struct AimlProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl AimlProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("mistralai/mistral-7b-instruct-v0.2").to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for AimlProvider {
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, NicolError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let resp = self.client
            .post("https://api.aimlapi.com/v1/chat/completions")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| NicolError::Network(format!("AI/ML request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(NicolError::RateLimit("AI/ML rate limit".into()));
        }
        if status.as_u16() == 401 {
            return Err(NicolError::Authentication("Invalid AI/ML API key".into()));
        }

        let data: ChatCompletionResponse = resp.json().await
            .map_err(|e| NicolError::LLMApi(format!("Failed to parse AI/ML response: {}", e)))?;

        if let Some(message) = data.error_message() {
            return Err(NicolError::LLMApi(message.to_string()));
        }

        let content = data.text()
            .ok_or_else(|| NicolError::LLMApi("No content in AI/ML response".into()))?
            .to_string();

        Ok(LLMResponse {
            content,
            input_tokens: data.prompt_tokens(),
            output_tokens: data.completion_tokens(),
            model: self.model.clone(),
        })
    }

    fn label(&self) -> &str { "AI/ML" }
    fn provider_name(&self) -> &str { "aiml" }
    fn model_name(&self) -> &str { &self.model }
}
