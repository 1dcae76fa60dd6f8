mod headless;
mod tui;

use clap::Parser;
use sentigen_core::config::{OutputLength, SentimentChoice};
use sentigen_core::logging::LoggingConfig;
use sentigen_core::pipeline::PipelineRequest;

/// Generate sentiment-aligned text for a prompt using Google Gemini Flash
#[derive(Parser, Debug)]
#[command(name = "sentigen", version, about)]
struct Cli {
    /// Prompt to analyze and generate content for; omit to open the interactive form
    prompt: Option<String>,

    /// Output length bucket: short, medium or long
    #[arg(long, default_value = "medium")]
    length: String,

    /// Sentiment override: auto, positive, negative or neutral
    #[arg(long, default_value = "auto")]
    sentiment: String,

    /// Google Gemini API key; falls back to the GOOGLE_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,

    /// Print the result as JSON (headless mode only)
    #[arg(long)]
    json: bool,

    /// Diagnostic log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Write diagnostics to this file instead of the console
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(level) = &cli.log_level {
        logging = logging.level(level.clone());
    }
    if let Some(path) = &cli.log_file {
        logging = logging.file_path(path);
    }
    let _ = logging.init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let length = OutputLength::parse(&cli.length)?;
    let sentiment = SentimentChoice::parse(&cli.sentiment)?;

    match cli.prompt {
        Some(prompt) => {
            let request = PipelineRequest {
                prompt,
                length,
                sentiment,
                api_key: cli.api_key,
            };
            headless::AppHeadless::new(cli.json).run(request).await
        }
        None => {
            let mut app = tui::App::new(length, sentiment, cli.api_key);
            app.run().await
        }
    }
}
