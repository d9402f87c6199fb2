//! Metadata fetcher
//!
//! Turns an owner/repo pair into normalized [`RepositoryMetadata`]: resolve
//! the branch, then fetch the recursive tree and the language breakdown
//! concurrently.

use crate::api::HostingApiClient;
use log::{debug, info};
use readmegen_core::{ReadmegenResult, RepositoryMetadata};
use std::sync::Arc;

/// Fetches and normalizes repository metadata through a hosting-API client
#[derive(Clone)]
pub struct MetadataFetcher {
    client: Arc<dyn HostingApiClient>,
}

impl MetadataFetcher {
    pub fn new(client: Arc<dyn HostingApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the metadata for `owner/repo`.
    ///
    /// With no branch override the repository-info call runs first and its
    /// `default_branch` parameterizes the tree request, falling back to
    /// `main` when the field is absent from a successful response. With an
    /// explicit override that call is skipped entirely. The tree and
    /// language calls are independent and issued concurrently; the first
    /// failure aborts the whole operation.
    pub async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        branch_override: Option<&str>,
    ) -> ReadmegenResult<RepositoryMetadata> {
        let branch = match branch_override {
            Some(branch) => branch.to_string(),
            None => self.resolve_default_branch(owner, repo).await?,
        };

        debug!("Fetching metadata for {}/{}@{}", owner, repo, branch);

        let (all_files, languages_used) = tokio::try_join!(
            self.client.get_file_tree(owner, repo, &branch),
            self.client.get_languages(owner, repo),
        )?;

        info!(
            "Fetched metadata for {}/{}: {} files, {} languages",
            owner,
            repo,
            all_files.len(),
            languages_used.len()
        );

        Ok(RepositoryMetadata::new(all_files, languages_used))
    }

    async fn resolve_default_branch(&self, owner: &str, repo: &str) -> ReadmegenResult<String> {
        let info = self.client.get_repository_info(owner, repo).await?;
        Ok(info.default_branch.unwrap_or_else(|| "main".to_string()))
    }
}
