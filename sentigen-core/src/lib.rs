pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod sentiment;

pub use config::{resolve_api_key, OutputLength, SentimentChoice};
pub use error::PipelineError;
pub use generator::{GeneratedText, SentimentGenerator, TextOrigin};
pub use logging::LoggingConfig;
pub use pipeline::{run_pipeline, run_with_client, PipelineOutput, PipelineRequest};
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentResult};
