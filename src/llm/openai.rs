use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use crate::errors::NicolError;
use super::provider::LLMProvider;
use super::types::LLMResponse;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gpt-4o-mini").to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

/// Typed view of a chat completions response, shared with the AI/ML
/// provider since its API is OpenAI-compatible.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl ChatCompletionResponse {
    /// choices[0].message.content, or None if any level is absent
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_deref().unwrap_or("Unknown"))
    }

    pub fn prompt_tokens(&self) -> Option<u64> {
        self.usage.as_ref().and_then(|u| u.prompt_tokens)
    }

    pub fn completion_tokens(&self) -> Option<u64> {
        self.usage.as_ref().and_then(|u| u.completion_tokens)
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, NicolError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| NicolError::Network(format!("OpenAI request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(NicolError::RateLimit("OpenAI rate limit".into()));
        }
        if status.as_u16() == 401 {
            return Err(NicolError::Authentication("Invalid OpenAI API key".into()));
        }

        let data: ChatCompletionResponse = resp.json().await
            .map_err(|e| NicolError::LLMApi(format!("Failed to parse OpenAI response: {}", e)))?;

        if let Some(message) = data.error_message() {
            return Err(NicolError::LLMApi(message.to_string()));
        }

        let content = data.text()
            .ok_or_else(|| NicolError::LLMApi("No content in OpenAI response".into()))?
            .to_string();

        Ok(LLMResponse {
            content,
            input_tokens: data.prompt_tokens(),
            output_tokens: data.completion_tokens(),
            model: self.model.clone(),
        })
    }

    fn label(&self) -> &str { "OpenAI" }
    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let data: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 5}
        })).unwrap();
        assert_eq!(data.text(), Some("hello"));
        assert_eq!(data.prompt_tokens(), Some(3));
        assert_eq!(data.completion_tokens(), Some(5));
    }

    #[test]
    fn test_extract_text_no_choices() {
        let data: ChatCompletionResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        assert_eq!(data.text(), None);
    }

    #[test]
    fn test_extract_text_null_content() {
        let data: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })).unwrap();
        assert_eq!(data.text(), None);
    }

    #[test]
    fn test_error_message() {
        let data: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })).unwrap();
        assert_eq!(data.error_message(), Some("Incorrect API key provided"));
    }
}
