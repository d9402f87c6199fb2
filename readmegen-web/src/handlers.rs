//! HTTP request handlers for the ReadmeGen web server

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use readmegen_core::{BranchMode, ReadmegenError};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Query parameters for the generation endpoints
#[derive(Debug, Deserialize)]
pub struct GenerateReadmeParams {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
}

/// Successful generation response
#[derive(Serialize)]
pub struct GenerateReadmeResponse {
    pub readme: String,
}

/// Structured error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    /// Which hosting-API call failed, when the failure came from upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// The remote status code, when the failure came from upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

/// Error type returned by the HTTP handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    /// A required query parameter was absent - rejected before any outbound call
    fn missing_params() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                detail: "Missing 'owner' or 'repo' query parameters.".to_string(),
                stage: None,
                upstream_status: None,
            },
        }
    }
}

impl From<ReadmegenError> for ApiError {
    fn from(err: ReadmegenError) -> Self {
        err.log();

        let status = match &err {
            ReadmegenError::Validation { .. } => StatusCode::BAD_REQUEST,
            // Upstream and generation failures are both surfaced as 500;
            // the body keeps stage and remote status distinguishable.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            body: ErrorResponse {
                detail: err.to_string(),
                stage: err.upstream_stage().map(|s| s.as_str().to_string()),
                upstream_status: err.upstream_status(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /generate-readme` - default branch resolved from repository info
pub async fn generate_readme(
    State(state): State<AppState>,
    Query(params): Query<GenerateReadmeParams>,
) -> Result<Json<GenerateReadmeResponse>, ApiError> {
    run_generation(state, params, false).await
}

/// `GET /generate_readme` - equivalent entry point with an explicit branch
/// override (defaults to `main`) instead of default-branch resolution
pub async fn generate_readme_with_branch(
    State(state): State<AppState>,
    Query(params): Query<GenerateReadmeParams>,
) -> Result<Json<GenerateReadmeResponse>, ApiError> {
    run_generation(state, params, true).await
}

async fn run_generation(
    state: AppState,
    params: GenerateReadmeParams,
    explicit_branch: bool,
) -> Result<Json<GenerateReadmeResponse>, ApiError> {
    let (owner, repo) = match (
        params.owner.filter(|s| !s.is_empty()),
        params.repo.filter(|s| !s.is_empty()),
    ) {
        (Some(owner), Some(repo)) => (owner, repo),
        _ => return Err(ApiError::missing_params()),
    };

    let branch = if explicit_branch {
        BranchMode::Explicit(params.branch.unwrap_or_else(|| "main".to_string()))
    } else {
        BranchMode::Auto
    };

    let readme = state.pipeline.generate(&owner, &repo, branch).await?;

    Ok(Json(GenerateReadmeResponse { readme }))
}
