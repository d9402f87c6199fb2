//! ReadmeGen Web Server
//!
//! This module provides the web interface for ReadmeGen: a single
//! parameterized README-generation pipeline exposed over HTTP.

pub mod handlers;
pub mod pipeline;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use pipeline::ReadmePipeline;
pub use server::ReadmegenServer;
pub use state::AppState;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    // Public, non-session-bearing API: any origin, all methods and headers,
    // credentials permitted. very_permissive mirrors the request origin,
    // which is how tower-http expresses wildcard-with-credentials.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(routes::generation_routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            dev_mode: false,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("READMEGEN_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("READMEGEN_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            dev_mode: std::env::var("READMEGEN_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM client error: {0}")]
    Llm(String),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readmegen_web=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
