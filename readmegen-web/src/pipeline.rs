//! The README generation pipeline
//!
//! One parameterized pipeline handles every entry point: the prompt template
//! and the branch-resolution mode are inputs, not separate code paths.
//! Fetch metadata, synthesize, return the document - no partial results.

use readmegen_core::{BranchMode, ErrorContext, ReadmegenError, ReadmegenResult};
use readmegen_llm::{LlmError, ReadmeSynthesizer};
use readmegen_repo::MetadataFetcher;
use std::time::Duration;
use tracing::{debug, info};

/// Two-stage pipeline: metadata fetch, then README synthesis
pub struct ReadmePipeline {
    fetcher: MetadataFetcher,
    synthesizer: ReadmeSynthesizer,
    request_timeout: Duration,
}

impl ReadmePipeline {
    pub fn new(
        fetcher: MetadataFetcher,
        synthesizer: ReadmeSynthesizer,
        request_timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            synthesizer,
            request_timeout,
        }
    }

    /// Run the whole pipeline for one request under a single deadline.
    ///
    /// Cancellation of the caller drops this future and with it any
    /// in-flight outbound calls.
    pub async fn generate(
        &self,
        owner: &str,
        repo: &str,
        branch: BranchMode,
    ) -> ReadmegenResult<String> {
        tokio::time::timeout(self.request_timeout, self.run(owner, repo, branch))
            .await
            .map_err(|_| ReadmegenError::Timeout {
                operation: format!("generate readme for {}/{}", owner, repo),
                duration_ms: self.request_timeout.as_millis() as u64,
                context: ErrorContext::new("pipeline")
                    .with_operation("generate")
                    .with_suggestion("Raise READMEGEN_REQUEST_TIMEOUT_SECS for large repositories"),
            })?
    }

    async fn run(&self, owner: &str, repo: &str, branch: BranchMode) -> ReadmegenResult<String> {
        debug!("Pipeline start for {}/{} ({:?})", owner, repo, branch);

        let metadata = self.fetcher.fetch(owner, repo, branch.explicit()).await?;

        let document = self
            .synthesizer
            .synthesize(&metadata, repo)
            .await
            .map_err(into_core_error)?;

        info!(
            "Pipeline complete for {}/{} ({} chars)",
            owner,
            repo,
            document.len()
        );

        Ok(document)
    }
}

/// Unwrap bridged core errors; everything else becomes a generation failure.
fn into_core_error(err: LlmError) -> ReadmegenError {
    match err {
        LlmError::Core(inner) => *inner,
        other => ReadmegenError::Llm {
            message: other.to_string(),
            provider: None,
            model: None,
            context: ErrorContext::new("pipeline").with_operation("synthesize"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_maps_to_core_llm_variant() {
        let err = into_core_error(LlmError::Llm("quota exceeded".to_string()));
        assert!(matches!(err, ReadmegenError::Llm { .. }));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_bridged_core_error_is_unwrapped() {
        let inner = ReadmegenError::Validation {
            message: "bad".to_string(),
            field: None,
            context: ErrorContext::new("test"),
        };
        let err = into_core_error(LlmError::Core(Box::new(inner)));
        assert!(matches!(err, ReadmegenError::Validation { .. }));
    }
}
