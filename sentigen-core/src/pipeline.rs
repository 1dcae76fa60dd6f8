use sentigen_llm::TextClient;
use serde::Serialize;
use tracing::info;

use crate::config::{resolve_api_key, OutputLength, SentimentChoice};
use crate::error::PipelineError;
use crate::generator::{SentimentGenerator, TextOrigin};
use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// One user action worth of work: the prompt plus the form configuration.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub prompt: String,
    pub length: OutputLength,
    pub sentiment: SentimentChoice,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub text: String,
    pub origin: TextOrigin,
    pub word_count: usize,
}

/// Run a full classify-then-generate pass.
///
/// The credential is resolved here and a fresh client is built per
/// invocation; the analyzer is the one piece of state the caller reuses
/// across invocations. The only hard failure is a missing credential.
pub async fn run_pipeline(
    analyzer: &SentimentAnalyzer,
    request: &PipelineRequest,
) -> Result<PipelineOutput, PipelineError> {
    let api_key = resolve_api_key(request.api_key.as_deref())?;
    let client = TextClient::gemini(api_key);
    run_with_client(analyzer, request, client).await
}

/// Same pass with a caller-supplied client, the seam tests use to substitute
/// the remote service.
pub async fn run_with_client(
    analyzer: &SentimentAnalyzer,
    request: &PipelineRequest,
    client: TextClient,
) -> Result<PipelineOutput, PipelineError> {
    let (sentiment, confidence) = match request.sentiment.as_override() {
        Some(sentiment) => (sentiment, 1.0),
        None => {
            let result = analyzer.analyze(&request.prompt);
            (result.label, result.confidence)
        }
    };
    info!(target: "pipeline", "sentiment={} confidence={:.2}", sentiment, confidence);

    let generator = SentimentGenerator::new(client);
    let generated = generator
        .generate(&request.prompt, sentiment, request.length.target_words())
        .await;
    let word_count = generated.text.split_whitespace().count();

    Ok(PipelineOutput {
        sentiment,
        confidence,
        text: generated.text,
        origin: generated.origin,
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use sentigen_llm::{GenerationParameters, LlmError, ProviderInfo, TextClient, TextProvider};

    use super::*;

    struct RecordingProvider {
        reply: Option<String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingProvider {
        fn client(reply: Option<&str>) -> (TextClient, Arc<Mutex<Vec<String>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let provider = RecordingProvider {
                reply: reply.map(str::to_string),
                prompts: prompts.clone(),
            };
            (TextClient::with_provider(Box::new(provider)), prompts)
        }
    }

    #[async_trait]
    impl TextProvider for RecordingProvider {
        async fn generate(&self, request: GenerationParameters) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(request.prompt);
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err("simulated outage".into()),
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }

        fn info() -> ProviderInfo {
            ProviderInfo {
                name: "recording",
                display_name: "Recording test provider",
                env_vars: vec![],
            }
        }
    }

    fn request(prompt: &str) -> PipelineRequest {
        PipelineRequest {
            prompt: prompt.to_string(),
            length: OutputLength::Medium,
            sentiment: SentimentChoice::AutoDetect,
            api_key: None,
        }
    }

    #[tokio::test]
    async fn positive_prompt_flows_end_to_end() {
        let analyzer = SentimentAnalyzer::new();
        let (client, prompts) = RecordingProvider::client(Some("What a delight to read about."));

        let output = run_with_client(&analyzer, &request("I love this amazing product"), client)
            .await
            .unwrap();

        assert_eq!(output.sentiment, Sentiment::Positive);
        assert!((output.confidence - 0.8).abs() < 1e-9);
        assert_eq!(output.origin, TextOrigin::Model);
        assert_eq!(output.word_count, 6);

        let prompts = prompts.lock().unwrap();
        assert!(prompts[0].starts_with("Write a positive, uplifting 150-word response about:"));
    }

    #[tokio::test]
    async fn neutral_prompt_without_marker_words() {
        let analyzer = SentimentAnalyzer::new();
        let (client, _prompts) = RecordingProvider::client(Some("Calendars are useful."));

        let output = run_with_client(&analyzer, &request("The meeting is at 3pm"), client)
            .await
            .unwrap();

        assert_eq!(output.sentiment, Sentiment::Neutral);
        assert!((output.confidence - 0.65).abs() < 1e-9);
    }

    #[tokio::test]
    async fn manual_override_bypasses_classifier() {
        let analyzer = SentimentAnalyzer::new();
        let (client, prompts) = RecordingProvider::client(Some("Noted."));

        let mut req = request("I love this amazing product");
        req.sentiment = SentimentChoice::Negative;

        let output = run_with_client(&analyzer, &req, client).await.unwrap();

        assert_eq!(output.sentiment, Sentiment::Negative);
        assert_eq!(output.confidence, 1.0);

        let prompts = prompts.lock().unwrap();
        assert!(prompts[0].starts_with("Write a balanced, constructive 150-word response"));
    }

    #[tokio::test]
    async fn provider_outage_degrades_to_fallback_output() {
        let analyzer = SentimentAnalyzer::new();
        let (client, _prompts) = RecordingProvider::client(None);

        let output = run_with_client(&analyzer, &request("I love this amazing product"), client)
            .await
            .unwrap();

        assert_eq!(output.origin, TextOrigin::Fallback);
        assert!(output.text.starts_with("This presents exciting opportunities"));
        assert!(output.text.contains("I love this amazing product"));
        assert_eq!(output.word_count, output.text.split_whitespace().count());
    }

    #[tokio::test]
    async fn missing_credential_surfaces_configuration_error() {
        let analyzer = SentimentAnalyzer::new();

        let mut req = request("anything");
        // a blank explicit key never satisfies resolution
        req.api_key = Some("   ".to_string());

        if std::env::var("GOOGLE_API_KEY").is_ok() {
            // environment already provides a key, nothing to assert here
            return;
        }

        let err = run_pipeline(&analyzer, &req).await.unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
    }
}
