//! Gemini API client: request building and response parsing.

use async_trait::async_trait;
use base64::Engine;

use crate::config;
use crate::error::{AppError, Result};
use crate::workspace::WorkspaceSnapshot;

use super::{prompt, AssistantBackend};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiConfig {
    /// Reads the API key from the environment. A missing key is not an
    /// error here; it surfaces when the remote call is rejected.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(config::GEMINI_API_KEY_ENV).unwrap_or_default(),
            model: config::GEMINI_MODEL.to_string(),
        }
    }
}

pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(
                    config::HTTP_CONNECT_TIMEOUT_SECS,
                ))
                .timeout(std::time::Duration::from_secs(
                    config::HTTP_REQUEST_TIMEOUT_SECS,
                ))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    fn build_chat_body(
        &self,
        message: &str,
        context: &WorkspaceSnapshot,
    ) -> Result<serde_json::Value> {
        let instruction = prompt::build_system_instruction(context)?;

        Ok(serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": message }]
            }]
        }))
    }

    fn build_transcription_body(&self, audio: &[u8]) -> serde_json::Value {
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);

        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {
                        "inlineData": {
                            "data": encoded,
                            "mimeType": config::AUDIO_MIME_TYPE
                        }
                    },
                    { "text": config::TRANSCRIPTION_INSTRUCTION }
                ]
            }]
        })
    }

    /// Extract the concatenated text parts of the first candidate.
    fn parse_response(&self, json: serde_json::Value) -> Result<String> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AppError::Assistant("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AppError::Assistant("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        Ok(content)
    }

    async fn generate(&self, body: serde_json::Value) -> Result<String> {
        tracing::debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(self.api_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Assistant(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Assistant(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Assistant(e.to_string()))?;

        self.parse_response(json)
    }
}

#[async_trait]
impl AssistantBackend for GeminiClient {
    async fn chat(&self, message: &str, context: &WorkspaceSnapshot) -> Result<String> {
        let body = self.build_chat_body(message, context)?;
        self.generate(body).await
    }

    async fn transcribe_audio(&self, audio: &[u8]) -> Result<String> {
        let body = self.build_transcription_body(audio);
        self.generate(body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::Workspace;

    fn test_client() -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: "test-key".to_string(),
            model: config::GEMINI_MODEL.to_string(),
        })
    }

    #[test]
    fn chat_body_embeds_system_instruction_and_message() {
        let client = test_client();
        let snapshot = Workspace::seeded().snapshot();

        let body = client.build_chat_body("What's next?", &snapshot).unwrap();

        let instruction = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(instruction.contains("OmniWork Assistant"));
        assert!(instruction.contains("Standup Meeting"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What's next?");
    }

    #[test]
    fn transcription_body_carries_inline_audio_and_instruction() {
        let client = test_client();

        let body = client.build_transcription_body(&[1, 2, 3, 4]);

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts[0]["inlineData"]["mimeType"], config::AUDIO_MIME_TYPE);
        assert_eq!(parts[1]["text"], config::TRANSCRIPTION_INSTRUCTION);
    }

    #[test]
    fn parse_response_concatenates_text_parts() {
        let client = test_client();

        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Hello" }, { "text": " world" }]
                }
            }]
        });

        assert_eq!(client.parse_response(json).unwrap(), "Hello world");
    }

    #[test]
    fn parse_response_rejects_missing_candidates() {
        let client = test_client();

        let err = client.parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, AppError::Assistant(_)));
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let config = GeminiConfig {
            api_key: "secret".to_string(),
            model: "m".to_string(),
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
