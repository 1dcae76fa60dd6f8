use super::api::*;
use crate::provider::{EnvVar, GenerationParameters, LlmError, ProviderInfo, TextProvider};
use async_trait::async_trait;
use reqwest::Client;

pub struct GeminiProvider {
    api_key: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    /// Create Gemini provider from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env() -> Option<Self> {
        std::env::var("GOOGLE_API_KEY").ok().map(Self::new)
    }

    pub(crate) fn convert_to_gemini_format(request: &GenerationParameters) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: request.max_output_tokens,
                temperature: request.temperature,
                top_p: request.top_p,
                top_k: request.top_k,
            },
        }
    }

    pub(crate) fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or("Gemini response contained no candidates")?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("Gemini response contained no text parts".into());
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    async fn generate(&self, request: GenerationParameters) -> Result<String, LlmError> {
        let gemini_request = Self::convert_to_gemini_format(&request);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                GEMINI_API_BASE, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .timeout(request.timeout)
            .json(&gemini_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(format!("Gemini API error: {}", error_text).into());
        }

        let gemini_response: GenerateContentResponse = response.json().await?;
        Self::extract_text(gemini_response)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn info() -> ProviderInfo {
        ProviderInfo {
            name: "gemini",
            display_name: "Google Gemini (gemini-1.5-flash)",
            env_vars: vec![EnvVar::required("GOOGLE_API_KEY", "Google Gemini API key")],
        }
    }
}
