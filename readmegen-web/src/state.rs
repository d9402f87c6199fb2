//! Application state management
//!
//! Wires the hosting-API client, the LLM client and the pipeline together.
//! There is no cross-request mutable state; every request works off the
//! same immutable pipeline.

use crate::{ReadmePipeline, WebConfig, WebError, WebResult};
use readmegen_core::AppConfig;
use readmegen_llm::{LlmConfig, PromptTemplate, ReadmeSynthesizer, ReadmegenLlmClient};
use readmegen_repo::{ApiClientConfig, GitHubApiClient, MetadataFetcher};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Web server configuration
    pub config: WebConfig,
    /// The README generation pipeline
    pub pipeline: Arc<ReadmePipeline>,
}

impl AppState {
    /// Create the production state: GitHub client and siumai-backed LLM
    /// client built from the application configuration resolved at startup.
    pub async fn new(config: WebConfig, app_config: AppConfig) -> WebResult<Self> {
        app_config
            .validate()
            .map_err(|e| WebError::Config(e.to_string()))?;

        let api_config = ApiClientConfig::github(app_config.hosting.access_token.clone())
            .with_base_url(app_config.hosting.base_url.clone())
            .with_timeout(app_config.hosting.timeout_seconds);
        let hosting_client =
            GitHubApiClient::new(api_config).map_err(|e| WebError::Config(e.to_string()))?;
        let fetcher = MetadataFetcher::new(Arc::new(hosting_client));

        let template = match app_config.model.template.as_str() {
            "minimal" => PromptTemplate::Minimal,
            _ => PromptTemplate::Rich,
        };

        let llm_client = ReadmegenLlmClient::new(LlmConfig::from(app_config.model.clone()))
            .await
            .map_err(|e| WebError::Llm(e.to_string()))?;
        let synthesizer = ReadmeSynthesizer::new(Arc::new(llm_client), template);

        let pipeline = ReadmePipeline::new(
            fetcher,
            synthesizer,
            Duration::from_secs(app_config.request_timeout_seconds),
        );

        info!(
            "Application state ready (hosting: {}, model: {}/{})",
            app_config.hosting.base_url, app_config.model.provider, app_config.model.model
        );

        Ok(Self {
            config,
            pipeline: Arc::new(pipeline),
        })
    }

    /// Create a state around an already-built pipeline. This is the
    /// injection point the tests use to substitute mock collaborators.
    pub fn with_pipeline(config: WebConfig, pipeline: Arc<ReadmePipeline>) -> Self {
        Self { config, pipeline }
    }
}
