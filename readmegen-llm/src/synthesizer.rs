//! README synthesizer
//!
//! Joins the prompt template and the text generator: builds the prompt
//! context from fetched metadata, submits it, and returns the raw model
//! output verbatim.

use crate::generator::TextGenerator;
use crate::prompts::PromptTemplate;
use crate::types::LlmResult;
use readmegen_core::{PromptContext, RepositoryMetadata};
use std::sync::Arc;
use tracing::{debug, info};

/// Synthesizes a README document from repository metadata
#[derive(Clone)]
pub struct ReadmeSynthesizer {
    generator: Arc<dyn TextGenerator>,
    template: PromptTemplate,
}

impl ReadmeSynthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>, template: PromptTemplate) -> Self {
        Self {
            generator,
            template,
        }
    }

    /// Generate a README for `repo_name` from the fetched metadata.
    ///
    /// Empty metadata is still a valid substitution; the model is invoked
    /// either way. The output is returned exactly as produced - the
    /// do-not-fabricate constraints live in the prompt, not in a
    /// post-processing pass.
    pub async fn synthesize(
        &self,
        metadata: &RepositoryMetadata,
        repo_name: &str,
    ) -> LlmResult<String> {
        let context = PromptContext::new(repo_name, metadata);
        let prompt = self.template.render(&context);

        debug!(
            "Synthesizing README for {} ({} files, {} languages) via {}",
            repo_name,
            context.all_files.len(),
            context.languages_used.len(),
            self.generator.describe()
        );

        let document = self
            .generator
            .generate(self.template.system_prompt(), &prompt)
            .await?;

        info!(
            "Synthesized README for {} ({} chars)",
            repo_name,
            document.len()
        );

        Ok(document)
    }

    pub fn template(&self) -> PromptTemplate {
        self.template
    }
}
