use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse emotional valence of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Title-cased name for display panels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "🟢",
            Sentiment::Negative => "🔴",
            Sentiment::Neutral => "🟡",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification outcome. The confidence is a heuristic score, not a
/// calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub confidence: f64,
}

const POSITIVE_WORDS: &[&str] = &[
    "love", "like", "great", "good", "excellent", "amazing", "wonderful",
    "fantastic", "awesome", "brilliant", "perfect", "happy", "joy", "excited",
    "thrilled", "delighted", "pleased", "satisfied", "impressed", "outstanding",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "bad", "terrible", "awful", "horrible", "disgusting",
    "disappointing", "frustrated", "angry", "sad", "upset", "annoyed", "worried",
    "concerned", "problem", "issue", "wrong", "failed", "broken",
];

// Fixed on purpose: a tie carries no signal, so the count formula does not apply.
const NEUTRAL_CONFIDENCE: f64 = 0.65;

/// Keyword-counting sentiment analyzer over two fixed marker word sets.
///
/// Construction builds the sets and compiles the tokenizer once; the analyzer
/// is immutable afterwards and is meant to be reused across invocations.
pub struct SentimentAnalyzer {
    positive_words: HashSet<&'static str>,
    negative_words: HashSet<&'static str>,
    token_regex: Regex,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().copied().collect(),
            negative_words: NEGATIVE_WORDS.iter().copied().collect(),
            token_regex: Regex::new(r"\b\w+\b").unwrap(),
        }
    }

    /// Classify `text`. Always returns a result; input with no marker words
    /// (including the empty string) falls to the neutral branch.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();

        let mut positive_count = 0usize;
        let mut negative_count = 0usize;
        for token in self.token_regex.find_iter(&lowered) {
            let word = token.as_str();
            if self.positive_words.contains(word) {
                positive_count += 1;
            } else if self.negative_words.contains(word) {
                negative_count += 1;
            }
        }

        if positive_count > negative_count {
            SentimentResult {
                label: Sentiment::Positive,
                confidence: scaled_confidence(positive_count),
            }
        } else if negative_count > positive_count {
            SentimentResult {
                label: Sentiment::Negative,
                confidence: scaled_confidence(negative_count),
            }
        } else {
            SentimentResult {
                label: Sentiment::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            }
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn scaled_confidence(count: usize) -> f64 {
    (0.6 + 0.1 * count as f64).min(0.95)
}
