mod analyzer;


pub use analyzer::{Sentiment, SentimentAnalyzer, SentimentResult};
