pub mod client;
pub mod provider;
pub mod providers;

// Re-export our client
pub use client::TextClient;

pub use provider::{EnvVar, GenerationParameters, LlmError, ProviderInfo, TextProvider};
pub use providers::gemini::GeminiProvider;
