//! Gemini `generateContent` client used for event description suggestions.

use greenforest_core::config::StudioConfig;
use greenforest_core::error::{StudioError, StudioResult};
use greenforest_core::suggest::{DescriptionRequest, DescriptionSource};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
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

impl GenerateResponse {
    /// Text of the first candidate, parts joined.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// A client when an API key is configured.
    pub fn from_config(config: &StudioConfig) -> Option<Self> {
        config
            .gemini_api_key
            .as_ref()
            .map(|key| Self::new(key.clone(), config.gemini_model.clone()))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", API_BASE, self.model)
    }
}

impl DescriptionSource for GeminiClient {
    async fn describe(&self, request: &DescriptionRequest) -> StudioResult<String> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": request.prompt() }]
            }]
        });

        debug!(model = %self.model, "requesting description");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| StudioError::Suggestion(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(StudioError::Suggestion(format!("HTTP {}: {}", status, text)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Suggestion(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "🌿 夏日"}, {"text": "森林见！"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "🌿 夏日森林见！");
    }

    #[test]
    fn missing_candidates_give_empty_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), "");
    }

    #[test]
    fn endpoint_names_model() {
        let client = GeminiClient::new("key", "gemini-3-flash-preview");
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn no_key_no_client() {
        let config = StudioConfig::default();
        assert!(GeminiClient::from_config(&config).is_none());
    }
}
