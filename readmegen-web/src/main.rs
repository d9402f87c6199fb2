//! ReadmeGen Web Server
//!
//! A web service that generates README documents for GitHub repositories
//! from their file tree and language breakdown.

use clap::Parser;
use readmegen_core::AppConfig;
use readmegen_web::server::ReadmegenServerBuilder;
use readmegen_web::init_logging;

/// ReadmeGen Web Server - AI-generated README documents for repositories
#[derive(Parser)]
#[command(name = "readmegen-web")]
#[command(about = "A web service that generates README documents")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("readmegen_web={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    let app_config = AppConfig::from_env();

    println!("Starting ReadmeGen Web Server");
    println!("Server: http://{}:{}", args.host, args.port);
    println!(
        "Model: {}/{}",
        app_config.model.provider, app_config.model.model
    );

    if app_config.model.api_key.is_none() && app_config.model.provider != "ollama" {
        println!("Warning: no model API key found in the environment.");
        println!("   Set GEMINI_API_KEY (or the provider's key variable).");
        println!("   The server will refuse to start without it.");
    }

    if app_config.hosting.access_token.is_none() {
        println!("Note: GITHUB_TOKEN is not set; anonymous rate limits apply.");
    }

    let server = match ReadmegenServerBuilder::new()
        .host(args.host)
        .port(args.port)
        .dev_mode(args.dev)
        .app_config(app_config)
        .build()
        .await
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    // Start the server (this will block until shutdown)
    if let Err(e) = server.start().await {
        eprintln!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}
