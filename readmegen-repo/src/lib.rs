//! Repository metadata access for ReadmeGen
//!
//! Provides the hosting-API client and the metadata fetcher that turns a
//! repository reference into normalized [`readmegen_core::RepositoryMetadata`].

pub mod api;
pub mod fetcher;

pub use api::{ApiClientConfig, GitHubApiClient, HostingApiClient, RepositoryInfo};
pub use fetcher::MetadataFetcher;
