//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Normalized repository metadata produced by the metadata fetcher.
///
/// Built once per request, immutable afterwards, and dropped together with
/// the request context once the response has been generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Every path from the recursive tree listing, in upstream order
    pub all_files: Vec<String>,
    /// Language name to byte count, passed through from the hosting API
    pub languages_used: HashMap<String, u64>,
}

impl RepositoryMetadata {
    pub fn new(all_files: Vec<String>, languages_used: HashMap<String, u64>) -> Self {
        Self {
            all_files,
            languages_used,
        }
    }
}

/// The exact variable set substituted into a prompt template.
///
/// Derived from [`RepositoryMetadata`] plus the caller-supplied repository
/// name; the metadata must be fully populated (both fields present, possibly
/// empty) before this is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptContext {
    pub repo_name: String,
    pub languages_used: HashMap<String, u64>,
    pub all_files: Vec<String>,
}

impl PromptContext {
    /// Build a prompt context from fetched metadata and the repository name
    pub fn new(repo_name: impl Into<String>, metadata: &RepositoryMetadata) -> Self {
        Self {
            repo_name: repo_name.into(),
            languages_used: metadata.languages_used.clone(),
            all_files: metadata.all_files.clone(),
        }
    }
}

/// Which of the three hosting-API calls failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpstreamStage {
    RepoInfo,
    Tree,
    Languages,
}

impl UpstreamStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamStage::RepoInfo => "repo-info",
            UpstreamStage::Tree => "tree",
            UpstreamStage::Languages => "languages",
        }
    }
}

impl fmt::Display for UpstreamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the branch used for the tree listing is determined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchMode {
    /// Resolve the default branch from the repository info endpoint
    Auto,
    /// Use the given branch and skip default-branch resolution
    Explicit(String),
}

impl BranchMode {
    /// The branch override, if any
    pub fn explicit(&self) -> Option<&str> {
        match self {
            BranchMode::Auto => None,
            BranchMode::Explicit(branch) => Some(branch),
        }
    }
}
