//! Type definitions for the synthesis layer

use readmegen_core::ModelSettings;
use serde::{Deserialize, Serialize};

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider type (gemini, openai, anthropic, ollama)
    pub provider: String,
    /// Model name
    pub model: String,
    /// API key (optional, can be set via environment)
    pub api_key: Option<String>,
    /// Base URL for custom providers
    pub base_url: Option<String>,
    /// Temperature for generation
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.6,
            max_tokens: None,
        }
    }
}

impl From<ModelSettings> for LlmConfig {
    fn from(settings: ModelSettings) -> Self {
        Self {
            provider: settings.provider,
            model: settings.model,
            api_key: settings.api_key,
            base_url: settings.base_url,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

/// Error types for the synthesis layer
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    Core(Box<readmegen_core::ReadmegenError>),
}

impl From<readmegen_core::ReadmegenError> for LlmError {
    fn from(err: readmegen_core::ReadmegenError) -> Self {
        LlmError::Core(Box::new(err))
    }
}

pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_llm_config() {
        let config = LlmConfig::default();
        assert_eq!(config.provider, "gemini");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_from_model_settings() {
        let settings = ModelSettings {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: Some("key".to_string()),
            base_url: None,
            temperature: 0.2,
            max_tokens: Some(2000),
            template: "rich".to_string(),
        };

        let config = LlmConfig::from(settings);
        assert_eq!(config.provider, "openai");
        assert_eq!(config.max_tokens, Some(2000));
    }
}
