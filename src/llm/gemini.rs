use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use crate::errors::NicolError;
use super::provider::LLMProvider;
use super::types::LLMResponse;

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gemini-2.5-flash").to_string(),
        }
    }
}

/// Typed view of a generateContent response. Every level is optional so a
/// malformed or error payload deserializes instead of failing; extraction
/// decides what counts as usable.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u64>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// candidates[0].content.parts[0].text, or None if any level is absent
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, NicolError> {
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let resp = self.client.post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NicolError::Network(format!("Gemini request failed: {}", e)))?;

        if resp.status().as_u16() == 429 {
            return Err(NicolError::RateLimit("Gemini rate limit".into()));
        }

        let data: GenerateContentResponse = resp.json().await
            .map_err(|e| NicolError::LLMApi(format!("Failed to parse Gemini response: {}", e)))?;

        if let Some(error) = &data.error {
            return Err(NicolError::LLMApi(
                error.message.as_deref().unwrap_or("Unknown Gemini error").to_string()
            ));
        }

        let content = data.text()
            .ok_or_else(|| NicolError::LLMApi("No content in Gemini response".into()))?
            .to_string();

        let usage = data.usage_metadata.as_ref();

        Ok(LLMResponse {
            content,
            input_tokens: usage.and_then(|u| u.prompt_token_count),
            output_tokens: usage.and_then(|u| u.candidates_token_count),
            model: self.model.clone(),
        })
    }

    fn label(&self) -> &str { "Gemini" }
    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let data: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "Summary X"}]}}]
        })).unwrap();
        assert_eq!(data.text(), Some("Summary X"));
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let data: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"candidates": []})).unwrap();
        assert_eq!(data.text(), None);
    }

    #[test]
    fn test_extract_text_missing_parts() {
        let data: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": []}}]
        })).unwrap();
        assert_eq!(data.text(), None);
    }

    #[test]
    fn test_error_payload_deserializes() {
        let data: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "error": {"message": "API key not valid", "code": 400}
        })).unwrap();
        assert!(data.error.is_some());
        assert_eq!(data.text(), None);
    }

    #[test]
    fn test_usage_metadata() {
        let data: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}],
            "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 42}
        })).unwrap();
        let usage = data.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, Some(7));
        assert_eq!(usage.candidates_token_count, Some(42));
    }
}
