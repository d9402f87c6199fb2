//! Integration test helpers
//!
//! Spawns a full application instance on a free port, backed by a mock
//! hosting-API server and a scripted text generator, and drives it over
//! real HTTP with reqwest.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use readmegen_llm::{LlmError, LlmResult, PromptTemplate, ReadmeSynthesizer, TextGenerator};
use readmegen_repo::{ApiClientConfig, GitHubApiClient, MetadataFetcher};
use readmegen_web::{AppState, ReadmePipeline, WebConfig};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

// Initialize tracing at most once across the test binary
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// Scripted hosting API: configurable responses plus per-route hit counters
pub struct MockHosting {
    pub repo_info_status: StatusCode,
    pub tree_status: StatusCode,
    pub languages_status: StatusCode,
    pub default_branch: Option<String>,
    pub tree_paths: Vec<String>,
    pub languages: Vec<(String, u64)>,
    pub repo_info_hits: AtomicUsize,
    pub tree_hits: AtomicUsize,
    pub languages_hits: AtomicUsize,
}

impl Default for MockHosting {
    fn default() -> Self {
        Self {
            repo_info_status: StatusCode::OK,
            tree_status: StatusCode::OK,
            languages_status: StatusCode::OK,
            default_branch: Some("master".to_string()),
            tree_paths: vec!["README".to_string(), "src/main.c".to_string()],
            languages: vec![("C".to_string(), 120)],
            repo_info_hits: AtomicUsize::new(0),
            tree_hits: AtomicUsize::new(0),
            languages_hits: AtomicUsize::new(0),
        }
    }
}

impl MockHosting {
    pub fn total_hits(&self) -> usize {
        self.repo_info_hits.load(Ordering::SeqCst)
            + self.tree_hits.load(Ordering::SeqCst)
            + self.languages_hits.load(Ordering::SeqCst)
    }
}

async fn mock_repo_info(
    State(mock): State<Arc<MockHosting>>,
    Path((_owner, repo)): Path<(String, String)>,
) -> impl IntoResponse {
    mock.repo_info_hits.fetch_add(1, Ordering::SeqCst);
    if mock.repo_info_status != StatusCode::OK {
        return (mock.repo_info_status, Json(json!({"message": "Not Found"})));
    }
    let mut body = json!({"name": repo, "description": "test repository"});
    if let Some(branch) = &mock.default_branch {
        body["default_branch"] = json!(branch);
    }
    (StatusCode::OK, Json(body))
}

async fn mock_tree(State(mock): State<Arc<MockHosting>>) -> impl IntoResponse {
    mock.tree_hits.fetch_add(1, Ordering::SeqCst);
    if mock.tree_status != StatusCode::OK {
        return (mock.tree_status, Json(json!({"message": "No commit found"})));
    }
    let entries: Vec<Value> = mock
        .tree_paths
        .iter()
        .map(|path| json!({"path": path, "type": "blob"}))
        .collect();
    (
        StatusCode::OK,
        Json(json!({"sha": "abc123", "tree": entries, "truncated": false})),
    )
}

async fn mock_languages(State(mock): State<Arc<MockHosting>>) -> impl IntoResponse {
    mock.languages_hits.fetch_add(1, Ordering::SeqCst);
    if mock.languages_status != StatusCode::OK {
        return (mock.languages_status, Json(json!({"message": "error"})));
    }
    let mut body = serde_json::Map::new();
    for (language, bytes) in &mock.languages {
        body.insert(language.clone(), json!(bytes));
    }
    (StatusCode::OK, Json(Value::Object(body)))
}

async fn spawn_mock_hosting(mock: Arc<MockHosting>) -> String {
    let app = Router::new()
        .route("/repos/{owner}/{repo}", get(mock_repo_info))
        .route("/repos/{owner}/{repo}/git/trees/{branch}", get(mock_tree))
        .route("/repos/{owner}/{repo}/languages", get(mock_languages))
        .with_state(mock);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Scripted generator: records every user prompt, returns a fixed document
pub struct MockGenerator {
    pub output: String,
    pub fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn returning(output: &str) -> Self {
        Self {
            output: output.to_string(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _system_prompt: &str, user_message: &str) -> LlmResult<String> {
        if self.fail {
            return Err(LlmError::Llm("mock provider failure".to_string()));
        }
        self.prompts.lock().unwrap().push(user_message.to_string());
        Ok(self.output.clone())
    }

    fn describe(&self) -> String {
        "mock/scripted".to_string()
    }
}

/// Running test application instance
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub hosting: Arc<MockHosting>,
    pub generator: Arc<MockGenerator>,
}

impl TestApp {
    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path_and_query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_with_origin(&self, path_and_query: &str, origin: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path_and_query))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawn a test application with default mock behavior
pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockHosting::default(), MockGenerator::returning("# Mock README")).await
}

/// Spawn a test application with the given mock hosting API and generator
pub async fn spawn_app_with(hosting: MockHosting, generator: MockGenerator) -> TestApp {
    LazyLock::force(&TRACING);

    let hosting = Arc::new(hosting);
    let generator = Arc::new(generator);

    let hosting_url = spawn_mock_hosting(hosting.clone()).await;

    let hosting_client =
        GitHubApiClient::new(ApiClientConfig::github(None).with_base_url(hosting_url)).unwrap();
    let fetcher = MetadataFetcher::new(Arc::new(hosting_client));
    let synthesizer = ReadmeSynthesizer::new(generator.clone(), PromptTemplate::Rich);
    let pipeline = ReadmePipeline::new(fetcher, synthesizer, Duration::from_secs(30));

    let config = WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        dev_mode: true,
    };
    let state = AppState::with_pipeline(config, Arc::new(pipeline));
    let app = readmegen_web::create_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://{}", addr),
        api_client,
        hosting,
        generator,
    }
}
