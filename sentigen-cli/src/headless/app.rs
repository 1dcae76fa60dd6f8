use sentigen_core::generator::TextOrigin;
use sentigen_core::pipeline::{run_pipeline, PipelineRequest};
use sentigen_core::sentiment::SentimentAnalyzer;

/// One-shot mode: run a single pipeline pass and print the result.
pub struct AppHeadless {
    json: bool,
}

impl AppHeadless {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub async fn run(&self, request: PipelineRequest) -> Result<(), Box<dyn std::error::Error>> {
        let analyzer = SentimentAnalyzer::new();

        let output = run_pipeline(&analyzer, &request).await.map_err(|e| {
            format!(
                "{}\nMake sure you have set your Google Gemini API key.",
                e
            )
        })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!(
            "{} {} ({:.0}% confidence)",
            output.sentiment.emoji(),
            output.sentiment.display_name(),
            output.confidence * 100.0
        );
        println!();
        println!("{}", output.text);
        println!();
        if output.origin == TextOrigin::Fallback {
            eprintln!("\x1b[2m(offline fallback: remote generation failed, check diagnostics)\x1b[0m");
        }
        println!("\x1b[2mWord count: {}\x1b[0m", output.word_count);
        Ok(())
    }
}
