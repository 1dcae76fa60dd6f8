use std::error::Error;
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

pub type LlmError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct EnvVar {
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub display_name: &'static str,
    pub env_vars: Vec<EnvVar>,
}

impl EnvVar {
    pub fn required(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: false,
        }
    }
}

/// A single-turn text generation request, provider-agnostic.
///
/// The sampling parameters and the timeout are fixed per request; providers
/// perform exactly one bounded call and never retry.
#[derive(Debug, Clone)]
pub struct GenerationParameters {
    pub model: String,
    pub prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub timeout: Duration,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            model: crate::providers::gemini::DEFAULT_MODEL.to_string(),
            prompt: String::new(),
            max_output_tokens: 200,
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Submit one generation request and return the produced text.
    async fn generate(&self, request: GenerationParameters) -> Result<String, LlmError>;

    fn name(&self) -> &'static str;

    /// Returns provider information including environment variables
    fn info() -> ProviderInfo
    where
        Self: Sized;
}

impl Debug for dyn TextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let debug = format!("TextProvider({})", self.name());
        write!(f, "{}", debug)
    }
}
