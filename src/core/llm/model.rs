use crate::error::Result;

/// Trait for generative-model providers used by the documentation passes
#[async_trait::async_trait]
pub trait LlmModel: Send + Sync {
    /// Run one prompt through the model and return the text of its reply
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name (e.g., "Google Gemini", "OpenAI")
    fn provider_name(&self) -> &str;

    /// Get the model name being used
    fn model_name(&self) -> &str;
}
