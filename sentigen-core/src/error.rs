use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}
