mod generator;

#[cfg(test)]
mod tests;

pub use generator::{GeneratedText, SentimentGenerator, TextOrigin};
