//! GitHub API client implementation

use async_trait::async_trait;
use log::{debug, info, warn};
use readmegen_core::{ErrorContext, ReadmegenError, ReadmegenResult, UpstreamStage};
use serde::Deserialize;
use std::collections::HashMap;

use super::{
    create_http_client, handle_response_error, ApiClientConfig, HostingApiClient, RepositoryInfo,
};

/// GitHub API client
pub struct GitHubApiClient {
    client: reqwest::Client,
    config: ApiClientConfig,
}

/// GitHub repository response
#[derive(Debug, Deserialize)]
struct GitHubRepository {
    name: String,
    description: Option<String>,
    default_branch: Option<String>,
}

/// GitHub tree response
#[derive(Debug, Deserialize)]
struct GitHubTreeResponse {
    #[serde(default)]
    tree: Vec<GitHubTreeItem>,
    truncated: Option<bool>,
}

/// GitHub tree item
#[derive(Debug, Deserialize)]
struct GitHubTreeItem {
    path: String,
}

impl GitHubApiClient {
    /// Create a new GitHub API client
    pub fn new(config: ApiClientConfig) -> ReadmegenResult<Self> {
        let client = create_http_client(&config)?;

        info!("Created GitHub API client for {}", config.base_url);

        Ok(Self { client, config })
    }

    /// Create authorization headers
    fn create_auth_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();

        if let Some(ref token) = self.config.access_token {
            if let Ok(auth_value) =
                reqwest::header::HeaderValue::from_str(&format!("token {}", token))
            {
                headers.insert(reqwest::header::AUTHORIZATION, auth_value);
            }
        }

        // GitHub API version
        if let Ok(accept_value) =
            reqwest::header::HeaderValue::from_str("application/vnd.github.v3+json")
        {
            headers.insert(reqwest::header::ACCEPT, accept_value);
        }

        headers
    }

    /// Make a GET request to the GitHub API, failing with an upstream error
    /// that names the stage on any non-success status.
    async fn get_request(
        &self,
        endpoint: &str,
        stage: UpstreamStage,
    ) -> ReadmegenResult<reqwest::Response> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        debug!("Making GitHub API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.create_auth_headers())
            .send()
            .await
            .map_err(|e| ReadmegenError::Network {
                message: format!("Failed to make request to GitHub API: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("github_api_client").with_operation(stage.as_str()),
            })?;

        if !response.status().is_success() {
            return Err(handle_response_error(response, stage).await);
        }

        Ok(response)
    }
}

#[async_trait]
impl HostingApiClient for GitHubApiClient {
    async fn get_repository_info(
        &self,
        owner: &str,
        repo: &str,
    ) -> ReadmegenResult<RepositoryInfo> {
        info!("Fetching GitHub repository info for {}/{}", owner, repo);

        let endpoint = format!("repos/{}/{}", owner, repo);
        let response = self.get_request(&endpoint, UpstreamStage::RepoInfo).await?;

        let github_repo: GitHubRepository =
            response.json().await.map_err(|e| ReadmegenError::Network {
                message: format!("Failed to parse repository info: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("github_api_client")
                    .with_operation("get_repository_info"),
            })?;

        Ok(RepositoryInfo {
            name: github_repo.name,
            description: github_repo.description,
            default_branch: github_repo.default_branch,
        })
    }

    async fn get_file_tree(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> ReadmegenResult<Vec<String>> {
        info!(
            "Fetching GitHub file tree for {}/{} (branch: {})",
            owner, repo, branch
        );

        let endpoint = format!("repos/{}/{}/git/trees/{}?recursive=1", owner, repo, branch);
        let response = self.get_request(&endpoint, UpstreamStage::Tree).await?;

        let tree_response: GitHubTreeResponse =
            response.json().await.map_err(|e| ReadmegenError::Network {
                message: format!("Failed to parse file tree: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("github_api_client").with_operation("get_file_tree"),
            })?;

        // Upstream truncation is inherited as-is; no further pagination.
        if tree_response.truncated.unwrap_or(false) {
            warn!("GitHub file tree was truncated for {}/{}", owner, repo);
        }

        let paths: Vec<String> = tree_response
            .tree
            .into_iter()
            .map(|item| item.path)
            .collect();

        info!(
            "Retrieved {} tree entries from GitHub repository {}/{}",
            paths.len(),
            owner,
            repo
        );
        Ok(paths)
    }

    async fn get_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> ReadmegenResult<HashMap<String, u64>> {
        debug!("Fetching GitHub languages for {}/{}", owner, repo);

        let endpoint = format!("repos/{}/{}/languages", owner, repo);
        let response = self.get_request(&endpoint, UpstreamStage::Languages).await?;

        // The body is already a language-to-bytes object; pass it through unchanged.
        let languages: HashMap<String, u64> =
            response.json().await.map_err(|e| ReadmegenError::Network {
                message: format!("Failed to parse language breakdown: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("github_api_client").with_operation("get_languages"),
            })?;

        Ok(languages)
    }
}
