//! API clients for accessing remote repositories
//!
//! This module provides the client abstraction for Git hosting platforms,
//! allowing direct access to repository metadata without cloning.

use async_trait::async_trait;
use readmegen_core::{ErrorContext, ReadmegenError, ReadmegenResult, UpstreamStage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod github;


pub use github::GitHubApiClient;

/// Basic repository information from the hosting API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Repository name
    pub name: String,
    /// Repository description
    pub description: Option<String>,
    /// Default branch name; absent when the hosting API omits the field
    pub default_branch: Option<String>,
}

/// Configuration for API clients
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Access token for authentication
    pub access_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Additional headers
    pub headers: HashMap<String, String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            access_token: None,
            timeout_seconds: 30,
            user_agent: "readmegen/0.1".to_string(),
            headers: HashMap::new(),
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration for GitHub
    pub fn github(access_token: Option<String>) -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            access_token,
            ..Default::default()
        }
    }

    /// Override the API base URL (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set additional header
    pub fn with_header(mut self, key: String, value: String) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Trait for hosting-API clients
///
/// The three operations map onto the three upstream calls the metadata
/// fetcher issues per request.
#[async_trait]
pub trait HostingApiClient: Send + Sync {
    /// Get repository information (including the default branch)
    async fn get_repository_info(&self, owner: &str, repo: &str)
        -> ReadmegenResult<RepositoryInfo>;

    /// Get every path from the recursive file tree, in upstream order
    async fn get_file_tree(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> ReadmegenResult<Vec<String>>;

    /// Get the language breakdown (language name to byte count)
    async fn get_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> ReadmegenResult<HashMap<String, u64>>;
}

/// Helper function to create HTTP client with common configuration
pub(crate) fn create_http_client(config: &ApiClientConfig) -> ReadmegenResult<reqwest::Client> {
    let mut headers = reqwest::header::HeaderMap::new();

    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_str(&config.user_agent).map_err(|e| {
            ReadmegenError::Config {
                message: format!("Invalid user agent: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("http_client").with_operation("create_client"),
            }
        })?,
    );

    for (key, value) in &config.headers {
        let header_name = reqwest::header::HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ReadmegenError::Config {
                message: format!("Invalid header name '{}': {}", key, e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("http_client").with_operation("create_client"),
            }
        })?;

        let header_value =
            reqwest::header::HeaderValue::from_str(value).map_err(|e| ReadmegenError::Config {
                message: format!("Invalid header value for '{}': {}", key, e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("http_client").with_operation("create_client"),
            })?;

        headers.insert(header_name, header_value);
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .default_headers(headers)
        .build()
        .map_err(|e| ReadmegenError::Network {
            message: format!("Failed to create HTTP client: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("http_client").with_operation("create_client"),
        })?;

    Ok(client)
}

/// Turn a non-success hosting-API response into an upstream error that keeps
/// the remote status code and the failing call site.
pub(crate) async fn handle_response_error(
    response: reqwest::Response,
    stage: UpstreamStage,
) -> ReadmegenError {
    let status = response.status();
    let url = response.url().clone();

    let error_body = response.text().await.unwrap_or_default();

    ReadmegenError::Upstream {
        stage,
        status: status.as_u16(),
        message: format!(
            "{}: {}",
            url,
            if error_body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error")
            } else {
                &error_body
            }
        ),
        context: ErrorContext::new("api_client")
            .with_operation(stage.as_str())
            .with_suggestion(match status.as_u16() {
                401 => "Check your access token",
                403 => "Check repository permissions or rate limits",
                404 => "Repository not found or not accessible",
                _ => "Check network connectivity and API status",
            }),
    }
}
