use async_trait::async_trait;
use serde_json::json;

use super::model::LlmModel;
use crate::config::LlmConfig;
use crate::error::{DocsmithError, Result};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Factory function to create the appropriate model based on config
pub fn create_model(config: &LlmConfig) -> Result<Box<dyn LlmModel>> {
    if !config.enabled {
        return Err(DocsmithError::Config(
            "LLM integration is disabled".to_string(),
        ));
    }

    match config.provider.as_str() {
        "gemini" => Ok(Box::new(GeminiProvider::new(config)?)),
        "openai" => Ok(Box::new(OpenAiProvider::new(config)?)),
        _ => Err(DocsmithError::Config(format!(
            "Unsupported LLM provider: {}",
            config.provider
        ))),
    }
}

/// Google generative-language API provider
pub struct GeminiProvider {
    config: LlmConfig,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            DocsmithError::Config(
                "Gemini API key not set (config or GEMINI_API_KEY)".to_string(),
            )
        })?;

        Ok(Self {
            config: config.clone(),
            api_key,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl LlmModel for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_BASE_URL);
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base_url, self.config.model, self.api_key
        );

        let payload = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens.unwrap_or(2000),
                "temperature": self.config.temperature.unwrap_or(0.3)
            }
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DocsmithError::Llm(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DocsmithError::Llm(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DocsmithError::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        response_data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                DocsmithError::Llm("Gemini response contained no candidate text".to_string())
            })
    }

    fn provider_name(&self) -> &str {
        "Google Gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    config: LlmConfig,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            DocsmithError::Config(
                "OpenAI API key not set (config or OPENAI_API_KEY)".to_string(),
            )
        })?;

        Ok(Self {
            config: config.clone(),
            api_key,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl LlmModel for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.config.base_url.as_deref().unwrap_or(OPENAI_CHAT_URL);

        let payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert software documentation assistant. Generate clear, professional documentation that helps developers understand and use the code effectively."
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens.unwrap_or(2000),
            "temperature": self.config.temperature.unwrap_or(0.3)
        });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DocsmithError::Llm(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DocsmithError::Llm(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DocsmithError::Llm(format!("Failed to parse OpenAI response: {}", e)))?;

        response_data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                DocsmithError::Llm("OpenAI response contained no message content".to_string())
            })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
