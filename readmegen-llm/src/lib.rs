//! README synthesis for ReadmeGen
//!
//! Builds the instruction prompt from normalized repository metadata and
//! submits it to a generative text model through a unified client.

pub mod client;
pub mod generator;
pub mod prompts;
pub mod synthesizer;
pub mod types;

pub use client::{ModelInfo, ReadmegenLlmClient};
pub use generator::TextGenerator;
pub use prompts::PromptTemplate;
pub use synthesizer::ReadmeSynthesizer;
pub use types::{LlmConfig, LlmError, LlmResult};
