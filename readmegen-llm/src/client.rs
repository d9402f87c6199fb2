//! LLM client integration using siumai
//!
//! This module provides a unified interface for interacting with various
//! LLM providers through the siumai framework.

use crate::types::{LlmConfig, LlmError, LlmResult};
use siumai::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Unified LLM client that supports multiple providers
pub struct ReadmegenLlmClient {
    client: Box<dyn LlmClient>,
    config: LlmConfig,
}

impl ReadmegenLlmClient {
    /// Create a new LLM client
    pub async fn new(config: LlmConfig) -> LlmResult<Self> {
        let client = Self::build_client(&config).await?;

        info!(
            "Created LLM client for provider: {} with model: {}",
            config.provider, config.model
        );

        Ok(Self { client, config })
    }

    /// Build the appropriate siumai client based on configuration
    async fn build_client(config: &LlmConfig) -> LlmResult<Box<dyn LlmClient>> {
        match config.provider.as_str() {
            "gemini" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                    .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
                    .ok_or_else(|| LlmError::Config("Gemini API key not found".to_string()))?;

                let mut builder = LlmBuilder::new()
                    .gemini()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens as i32);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| LlmError::Llm(format!("Failed to build Gemini client: {}", e)))?;

                Ok(Box::new(client))
            }
            "openai" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| LlmError::Config("OpenAI API key not found".to_string()))?;

                let mut builder = LlmBuilder::new()
                    .openai()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                if let Some(base_url) = &config.base_url {
                    builder = builder.base_url(base_url);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| LlmError::Llm(format!("Failed to build OpenAI client: {}", e)))?;

                Ok(Box::new(client))
            }
            "anthropic" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                    .ok_or_else(|| LlmError::Config("Anthropic API key not found".to_string()))?;

                let mut builder = LlmBuilder::new()
                    .anthropic()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    LlmError::Llm(format!("Failed to build Anthropic client: {}", e))
                })?;

                Ok(Box::new(client))
            }
            "ollama" => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:11434".to_string());

                let mut builder = LlmBuilder::new()
                    .ollama()
                    .model(&config.model)
                    .base_url(&base_url)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder
                    .build()
                    .await
                    .map_err(|e| LlmError::Llm(format!("Failed to build Ollama client: {}", e)))?;

                Ok(Box::new(client))
            }
            provider => Err(LlmError::Config(format!(
                "Unsupported LLM provider: {}",
                provider
            ))),
        }
    }

    /// Generate a response using the LLM
    pub async fn generate(&self, messages: Vec<ChatMessage>) -> LlmResult<String> {
        let start_time = Instant::now();

        debug!("Generating response with {} messages", messages.len());

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| LlmError::Llm(format!("LLM generation failed: {}", e)))?;

        let generation_time = start_time.elapsed();

        if let Some(content) = response.content_text() {
            info!(
                "Generated response in {:?} ({} chars)",
                generation_time,
                content.len()
            );
            Ok(content.to_string())
        } else {
            Err(LlmError::Llm("No text content in LLM response".to_string()))
        }
    }

    /// Generate a response with system and user messages
    pub async fn generate_with_system(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> LlmResult<String> {
        let messages = vec![system!(system_prompt), user!(user_message)];

        self.generate(messages).await
    }

    /// Get the current configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Get model information
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            provider: self.config.provider.clone(),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

/// Information about the current model
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl ModelInfo {
    pub fn summary(&self) -> String {
        format!(
            "{}/{} (temp: {:.1})",
            self.provider, self.model, self.temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_provider_is_rejected() {
        let config = LlmConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        let result = ReadmegenLlmClient::new(config).await;
        assert!(matches!(result, Err(LlmError::Config(_))));
    }

    #[test]
    fn test_model_info_summary() {
        let info = ModelInfo {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.6,
            max_tokens: None,
        };
        assert_eq!(info.summary(), "gemini/gemini-2.5-flash (temp: 0.6)");
    }
}
