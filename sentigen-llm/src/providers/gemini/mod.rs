mod api;
mod gemini;


pub use api::{DEFAULT_MODEL, GEMINI_API_BASE};
pub use gemini::GeminiProvider;
