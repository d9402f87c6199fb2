//! Trait seam between the synthesizer and the model provider
//!
//! The web layer and the tests hold an `Arc<dyn TextGenerator>`; production
//! wires in the siumai-backed client, tests substitute a scripted one.

use crate::client::ReadmegenLlmClient;
use crate::types::LlmResult;
use async_trait::async_trait;

/// Single-turn text generation against a fixed model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit one system/user message pair and return the raw model output
    async fn generate(&self, system_prompt: &str, user_message: &str) -> LlmResult<String>;

    /// Human-readable description of the backing model
    fn describe(&self) -> String;
}

#[async_trait]
impl TextGenerator for ReadmegenLlmClient {
    async fn generate(&self, system_prompt: &str, user_message: &str) -> LlmResult<String> {
        self.generate_with_system(system_prompt, user_message).await
    }

    fn describe(&self) -> String {
        self.model_info().summary()
    }
}
