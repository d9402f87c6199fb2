//! Route definitions for the ReadmeGen web server

use crate::{handlers, AppState};
use axum::{routing::get, Router};

/// The README generation entry points
pub fn generation_routes() -> Router<AppState> {
    Router::new()
        // Default-branch resolution
        .route("/generate-readme", get(handlers::generate_readme))
        // Explicit branch override variant
        .route(
            "/generate_readme",
            get(handlers::generate_readme_with_branch),
        )
}

/// Ancillary API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}
