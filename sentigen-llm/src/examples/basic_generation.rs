// Basic generation example using the Gemini provider (GOOGLE_API_KEY)
use sentigen_llm::{client::TextClient, provider::{GenerationParameters, LlmError}};

#[tokio::main]
async fn main() -> Result<(), LlmError> {
    // Initialize Gemini client from environment variable (GOOGLE_API_KEY)
    let client = TextClient::from_env_gemini()
        .expect("GOOGLE_API_KEY environment variable not set");

    println!("Using provider: {}", client.provider_name());

    let request = GenerationParameters {
        prompt: "Write a neutral, informative 75-word response about: the Rust borrow checker".to_string(),
        ..Default::default()
    };

    let text = client.generate(request).await?;
    println!("Response: {}", text);

    Ok(())
}
