// llm/client.rs
use super::provider::{GenerationParameters, LlmError, ProviderInfo, TextProvider};
use super::providers::gemini::GeminiProvider;

#[derive(Debug)]
pub struct TextClient {
    provider: Box<dyn TextProvider>,
}

/// Provider Factory related methods
impl TextClient {
    pub fn gemini(api_key: String) -> Self {
        Self {
            provider: Box::new(GeminiProvider::new(api_key)),
        }
    }

    /// Create a Gemini client from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env_gemini() -> Option<Self> {
        GeminiProvider::from_env().map(|provider| Self {
            provider: Box::new(provider),
        })
    }

    /// Wrap an arbitrary provider. Used by callers that need to substitute
    /// the remote service, typically tests.
    pub fn with_provider(provider: Box<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Get information about all available providers
    pub fn list_providers() -> Vec<ProviderInfo> {
        vec![GeminiProvider::info()]
    }
}

/// Provider Delegate
impl TextClient {
    pub async fn generate(&self, request: GenerationParameters) -> Result<String, LlmError> {
        self.provider.generate(request).await
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Get a reference to the underlying provider (for testing)
    pub fn provider(&self) -> &dyn TextProvider {
        &*self.provider
    }
}
