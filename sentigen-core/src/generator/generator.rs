use sentigen_llm::{GenerationParameters, TextClient};
use serde::Serialize;
use tracing::warn;

use crate::sentiment::Sentiment;

/// Which path produced the text: the remote model, or the canned fallback
/// substituted when the remote call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrigin {
    Model,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedText {
    pub text: String,
    pub origin: TextOrigin,
}

/// Generates sentiment-aligned prose through a single bounded provider call.
///
/// Infallible from the caller's perspective: any failure of the remote call
/// (timeout, transport, service error, malformed response) is logged and
/// replaced by the deterministic fallback sentence.
pub struct SentimentGenerator {
    client: TextClient,
}

impl SentimentGenerator {
    pub fn new(client: TextClient) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        sentiment: Sentiment,
        word_count: u32,
    ) -> GeneratedText {
        let request = GenerationParameters {
            prompt: instruction(prompt, sentiment, word_count),
            ..Default::default()
        };

        match self.client.generate(request).await {
            Ok(text) => GeneratedText {
                text: text.trim().to_string(),
                origin: TextOrigin::Model,
            },
            Err(e) => {
                warn!(target: "generator", "generation failed, using fallback: {}", e);
                GeneratedText {
                    text: fallback(prompt, sentiment),
                    origin: TextOrigin::Fallback,
                }
            }
        }
    }
}

/// Instruction template keyed by sentiment. The word count is advisory text
/// for the model, not an enforced limit.
pub(crate) fn instruction(prompt: &str, sentiment: Sentiment, word_count: u32) -> String {
    match sentiment {
        Sentiment::Positive => format!(
            "Write a positive, uplifting {}-word response about: {}",
            word_count, prompt
        ),
        Sentiment::Negative => format!(
            "Write a balanced, constructive {}-word response addressing concerns about: {}",
            word_count, prompt
        ),
        Sentiment::Neutral => format!(
            "Write a neutral, informative {}-word response about: {}",
            word_count, prompt
        ),
    }
}

pub(crate) fn fallback(prompt: &str, sentiment: Sentiment) -> String {
    let starter = match sentiment {
        Sentiment::Positive => "This presents exciting opportunities",
        Sentiment::Negative => "There are important considerations",
        Sentiment::Neutral => "This topic involves several aspects",
    };

    format!(
        "{} regarding {}. The subject deserves careful analysis and thoughtful \
         consideration of various perspectives and potential outcomes.",
        starter, prompt
    )
}
