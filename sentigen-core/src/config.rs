use crate::error::PipelineError;
use crate::sentiment::Sentiment;

/// Output length buckets offered by the interface. The target is advisory
/// wording embedded in the generation instruction, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl OutputLength {
    pub const ALL: [OutputLength; 3] = [OutputLength::Short, OutputLength::Medium, OutputLength::Long];

    pub fn target_words(&self) -> u32 {
        match self {
            OutputLength::Short => 75,
            OutputLength::Medium => 150,
            OutputLength::Long => 250,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputLength::Short => "Short (50-100 words)",
            OutputLength::Medium => "Medium (100-200 words)",
            OutputLength::Long => "Long (200-300 words)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|length| length.label() == label)
    }

    /// Parse the short command line form: short, medium or long.
    pub fn parse(name: &str) -> Result<Self, PipelineError> {
        match name.to_lowercase().as_str() {
            "short" => Ok(OutputLength::Short),
            "medium" => Ok(OutputLength::Medium),
            "long" => Ok(OutputLength::Long),
            other => Err(PipelineError::InvalidSelection(format!(
                "unknown length '{}', expected short, medium or long",
                other
            ))),
        }
    }
}

/// Sentiment selection from the form: auto-detect runs the classifier, any
/// other choice bypasses it with confidence fixed at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentChoice {
    #[default]
    AutoDetect,
    Positive,
    Negative,
    Neutral,
}

impl SentimentChoice {
    pub const ALL: [SentimentChoice; 4] = [
        SentimentChoice::AutoDetect,
        SentimentChoice::Positive,
        SentimentChoice::Negative,
        SentimentChoice::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentimentChoice::AutoDetect => "Auto-detect",
            SentimentChoice::Positive => "Positive",
            SentimentChoice::Negative => "Negative",
            SentimentChoice::Neutral => "Neutral",
        }
    }

    pub fn as_override(&self) -> Option<Sentiment> {
        match self {
            SentimentChoice::AutoDetect => None,
            SentimentChoice::Positive => Some(Sentiment::Positive),
            SentimentChoice::Negative => Some(Sentiment::Negative),
            SentimentChoice::Neutral => Some(Sentiment::Neutral),
        }
    }

    pub fn parse(name: &str) -> Result<Self, PipelineError> {
        match name.to_lowercase().as_str() {
            "auto" | "auto-detect" => Ok(SentimentChoice::AutoDetect),
            "positive" => Ok(SentimentChoice::Positive),
            "negative" => Ok(SentimentChoice::Negative),
            "neutral" => Ok(SentimentChoice::Neutral),
            other => Err(PipelineError::InvalidSelection(format!(
                "unknown sentiment '{}', expected auto, positive, negative or neutral",
                other
            ))),
        }
    }
}

/// Resolve the Gemini credential once, at the pipeline entry point: an
/// explicit value wins, then the GOOGLE_API_KEY environment variable.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<String, PipelineError> {
    resolve_api_key_with(explicit, std::env::var("GOOGLE_API_KEY").ok())
}

fn resolve_api_key_with(
    explicit: Option<&str>,
    env_value: Option<String>,
) -> Result<String, PipelineError> {
    if let Some(key) = explicit {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    match env_value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PipelineError::Configuration(
            "Google Gemini API key required: pass one explicitly or set GOOGLE_API_KEY".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_mapping_is_exact() {
        assert_eq!(OutputLength::Short.target_words(), 75);
        assert_eq!(OutputLength::Medium.target_words(), 150);
        assert_eq!(OutputLength::Long.target_words(), 250);
    }

    #[test]
    fn labels_round_trip() {
        for length in OutputLength::ALL {
            assert_eq!(OutputLength::from_label(length.label()), Some(length));
        }
        assert_eq!(OutputLength::from_label("Short (50-100 words)"), Some(OutputLength::Short));
        assert_eq!(OutputLength::from_label("Tiny"), None);
    }

    #[test]
    fn parse_accepts_short_names() {
        assert_eq!(OutputLength::parse("short").unwrap(), OutputLength::Short);
        assert_eq!(OutputLength::parse("MEDIUM").unwrap(), OutputLength::Medium);
        assert!(matches!(
            OutputLength::parse("huge"),
            Err(PipelineError::InvalidSelection(_))
        ));
    }

    #[test]
    fn sentiment_choice_overrides() {
        assert_eq!(SentimentChoice::AutoDetect.as_override(), None);
        assert_eq!(
            SentimentChoice::Negative.as_override(),
            Some(Sentiment::Negative)
        );
        assert_eq!(SentimentChoice::parse("auto").unwrap(), SentimentChoice::AutoDetect);
        assert_eq!(SentimentChoice::parse("Positive").unwrap(), SentimentChoice::Positive);
        assert!(SentimentChoice::parse("angry").is_err());
    }

    #[test]
    fn explicit_key_wins_over_environment() {
        let key = resolve_api_key_with(Some("explicit-key"), Some("env-key".to_string())).unwrap();
        assert_eq!(key, "explicit-key");
    }

    #[test]
    fn environment_key_used_when_no_explicit_value() {
        let key = resolve_api_key_with(None, Some("env-key".to_string())).unwrap();
        assert_eq!(key, "env-key");

        // A blank explicit value does not shadow the environment
        let key = resolve_api_key_with(Some("   "), Some("env-key".to_string())).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let err = resolve_api_key_with(None, None).unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }
}
