//! ReadmeGen Core - Core data structures and shared infrastructure
//!
//! This module defines the data model, error system, logging and configuration
//! shared by the fetcher, synthesizer and web crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use async_trait::async_trait;
pub use tokio;
pub use tracing;
