use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sentigen_llm::{EnvVar, GenerationParameters, LlmError, ProviderInfo, TextClient, TextProvider};

use super::generator::{fallback, instruction};
use super::{SentimentGenerator, TextOrigin};
use crate::sentiment::Sentiment;

/// Provider double that either returns a canned reply or fails outright,
/// recording every instruction it receives.
struct ScriptedProvider {
    reply: Option<String>,
    seen: Arc<Mutex<Vec<GenerationParameters>>>,
}

impl ScriptedProvider {
    fn replying(text: &str) -> (Self, Arc<Mutex<Vec<GenerationParameters>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply: Some(text.to_string()),
                seen: seen.clone(),
            },
            seen,
        )
    }

    fn failing() -> (Self, Arc<Mutex<Vec<GenerationParameters>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply: None,
                seen: seen.clone(),
            },
            seen,
        )
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    async fn generate(&self, request: GenerationParameters) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push(request);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err("simulated transport failure".into()),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn info() -> ProviderInfo {
        ProviderInfo {
            name: "scripted",
            display_name: "Scripted test provider",
            env_vars: vec![EnvVar::optional("SCRIPTED", "unused")],
        }
    }
}

#[tokio::test]
async fn successful_call_returns_trimmed_model_text() {
    let (provider, _seen) = ScriptedProvider::replying("  A fine answer.  \n");
    let generator = SentimentGenerator::new(TextClient::with_provider(Box::new(provider)));

    let result = generator.generate("coffee", Sentiment::Neutral, 150).await;
    assert_eq!(result.origin, TextOrigin::Model);
    assert_eq!(result.text, "A fine answer.");
}

#[tokio::test]
async fn failed_call_returns_sentiment_fallback() {
    let (provider, _seen) = ScriptedProvider::failing();
    let generator = SentimentGenerator::new(TextClient::with_provider(Box::new(provider)));

    let result = generator
        .generate("I love this amazing product", Sentiment::Positive, 75)
        .await;

    assert_eq!(result.origin, TextOrigin::Fallback);
    assert!(!result.text.is_empty());
    assert!(result.text.starts_with("This presents exciting opportunities"));
    assert!(result.text.contains("I love this amazing product"));
}

#[tokio::test]
async fn instruction_carries_sentiment_and_word_count() {
    let (provider, seen) = ScriptedProvider::replying("ok");
    let generator = SentimentGenerator::new(TextClient::with_provider(Box::new(provider)));

    generator.generate("the new release", Sentiment::Negative, 250).await;

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].prompt,
        "Write a balanced, constructive 250-word response addressing concerns about: the new release"
    );
    // sampling parameters ride along unchanged
    assert_eq!(requests[0].max_output_tokens, 200);
    assert_eq!(requests[0].timeout.as_secs(), 10);
}

#[test]
fn instruction_templates_per_sentiment() {
    assert_eq!(
        instruction("x", Sentiment::Positive, 75),
        "Write a positive, uplifting 75-word response about: x"
    );
    assert_eq!(
        instruction("x", Sentiment::Negative, 150),
        "Write a balanced, constructive 150-word response addressing concerns about: x"
    );
    assert_eq!(
        instruction("x", Sentiment::Neutral, 250),
        "Write a neutral, informative 250-word response about: x"
    );
}

#[test]
fn fallback_openers_per_sentiment() {
    assert!(fallback("x", Sentiment::Positive).starts_with("This presents exciting opportunities"));
    assert!(fallback("x", Sentiment::Negative).starts_with("There are important considerations"));
    assert!(fallback("x", Sentiment::Neutral).starts_with("This topic involves several aspects"));

    let text = fallback("the quarterly report", Sentiment::Neutral);
    assert!(text.contains("regarding the quarterly report."));
}
