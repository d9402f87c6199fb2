//! Configuration management
//!
//! All process-wide configuration is resolved once at startup and injected
//! into the components that need it; nothing reads the environment at call time.

use crate::error::{ErrorContext, ReadmegenError, ReadmegenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generative model settings
    pub model: ModelSettings,
    /// Hosting API settings
    pub hosting: HostingSettings,
    /// Overall per-request deadline for the generation pipeline, in seconds
    pub request_timeout_seconds: u64,
}

/// Generative model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Provider type (gemini, openai, anthropic, ollama)
    pub provider: String,
    /// Model identifier, fixed at call-construction time
    pub model: String,
    /// API key (resolved from the environment at startup)
    pub api_key: Option<String>,
    /// Base URL for custom providers
    pub base_url: Option<String>,
    /// Sampling temperature, fixed at call-construction time
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Prompt template variant (rich, minimal)
    pub template: String,
}

/// Hosting API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingSettings {
    /// Base URL of the hosting API
    pub base_url: String,
    /// Optional access token (anonymous rate limits apply without one)
    pub access_token: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_seconds: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelSettings {
                provider: "gemini".to_string(),
                model: "gemini-2.5-flash".to_string(),
                api_key: None,
                base_url: None,
                temperature: 0.6,
                max_tokens: None,
                template: "rich".to_string(),
            },
            hosting: HostingSettings {
                base_url: "https://api.github.com".to_string(),
                access_token: None,
                timeout_seconds: 30,
                user_agent: "readmegen/0.1".to_string(),
            },
            request_timeout_seconds: 120,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(provider) = std::env::var("READMEGEN_LLM_PROVIDER") {
            config.model.provider = provider;
        }
        if let Ok(model) = std::env::var("READMEGEN_LLM_MODEL") {
            config.model.model = model;
        }
        config.model.api_key = resolve_api_key(&config.model.provider);
        config.model.base_url = std::env::var("READMEGEN_LLM_BASE_URL").ok();
        if let Ok(temperature) = std::env::var("READMEGEN_LLM_TEMPERATURE") {
            if let Ok(temperature) = temperature.parse() {
                config.model.temperature = temperature;
            }
        }
        if let Ok(template) = std::env::var("READMEGEN_PROMPT_TEMPLATE") {
            config.model.template = template;
        }

        if let Ok(base_url) = std::env::var("GITHUB_API_URL") {
            config.hosting.base_url = base_url;
        }
        config.hosting.access_token = std::env::var("GITHUB_TOKEN").ok();
        if let Ok(timeout) = std::env::var("READMEGEN_HOSTING_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.hosting.timeout_seconds = timeout;
            }
        }

        if let Ok(timeout) = std::env::var("READMEGEN_REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.request_timeout_seconds = timeout;
            }
        }

        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReadmegenResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReadmegenError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ReadmegenError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ReadmegenResult<()> {
        if self.model.model.is_empty() {
            return Err(ReadmegenError::Config {
                message: "Model identifier must not be empty".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set model.model or READMEGEN_LLM_MODEL"),
            });
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ReadmegenError::Config {
                message: format!(
                    "Temperature {} is out of range (expected 0.0..=2.0)",
                    self.model.temperature
                ),
                source: None,
                context: ErrorContext::new("config").with_operation("validate"),
            });
        }

        // Ollama runs locally and needs no key; every cloud provider does.
        if self.model.provider != "ollama" && self.model.api_key.is_none() {
            return Err(ReadmegenError::Config {
                message: format!("No API key configured for provider {}", self.model.provider),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set GEMINI_API_KEY (or the provider's key variable)"),
            });
        }

        if !matches!(self.model.template.as_str(), "rich" | "minimal") {
            return Err(ReadmegenError::Config {
                message: format!("Unknown prompt template: {}", self.model.template),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Use \"rich\" or \"minimal\""),
            });
        }

        if self.request_timeout_seconds == 0 || self.hosting.timeout_seconds == 0 {
            return Err(ReadmegenError::Config {
                message: "Timeouts must be greater than 0".to_string(),
                source: None,
                context: ErrorContext::new("config").with_operation("validate"),
            });
        }

        Ok(())
    }
}

/// Resolve the provider API key from the conventional environment variables
fn resolve_api_key(provider: &str) -> Option<String> {
    match provider {
        "gemini" => std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok(),
        "openai" => std::env::var("OPENAI_API_KEY").ok(),
        "anthropic" => std::env::var("ANTHROPIC_API_KEY").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.model.provider, "gemini");
        assert_eq!(config.model.model, "gemini-2.5-flash");
        assert_eq!(config.hosting.base_url, "https://api.github.com");
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.model.api_key = Some("test-key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = AppConfig::default();
        config.model.api_key = Some("test-key".to_string());
        config.model.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let mut config = AppConfig::default();
        config.model.provider = "ollama".to_string();
        config.model.model = "llama3.2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.model.model, config.model.model);
        assert_eq!(parsed.hosting.timeout_seconds, config.hosting.timeout_seconds);
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readmegen.toml");
        std::fs::write(&path, toml::to_string(&AppConfig::default()).unwrap()).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.model.provider, "gemini");

        assert!(AppConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
