//! ReadmeGen Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use readmegen_core::AppConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main ReadmeGen web server
pub struct ReadmegenServer {
    config: WebConfig,
    state: AppState,
}

impl ReadmegenServer {
    /// Create a new ReadmeGen server
    pub async fn new(config: WebConfig, app_config: AppConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone(), app_config).await?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("Starting ReadmeGen Web Server");
        info!("Server address: http://{}", address);
        info!("Development mode: {}", self.config.dev_mode);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("Server listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for ReadmegenServer
pub struct ReadmegenServerBuilder {
    config: WebConfig,
    app_config: AppConfig,
}

impl ReadmegenServerBuilder {
    /// Create a new server builder with configuration resolved from the environment
    pub fn new() -> Self {
        Self {
            config: WebConfig::from_env(),
            app_config: AppConfig::from_env(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Replace the application configuration
    pub fn app_config(mut self, app_config: AppConfig) -> Self {
        self.app_config = app_config;
        self
    }

    /// Build the server
    pub async fn build(self) -> WebResult<ReadmegenServer> {
        ReadmegenServer::new(self.config, self.app_config).await
    }
}

impl Default for ReadmegenServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to start a server with environment configuration
pub async fn start_server() -> WebResult<()> {
    let server = ReadmegenServerBuilder::new().build().await?;
    server.start().await
}
