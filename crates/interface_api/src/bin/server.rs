//! Claim Status API - Server Binary
//!
//! This binary loads the claim documents and starts the HTTP API server.
//!
//! # Usage
//!
//! ```bash
//! # Run in mock mode (templated summaries)
//! cargo run --bin claim-status-api
//!
//! # Run against Azure OpenAI
//! AZURE_OPENAI_ENDPOINT=https://... AZURE_OPENAI_API_KEY=... cargo run --bin claim-status-api
//! ```
//!
//! # Environment Variables
//!
//! * `PORT` / `API_PORT` - Server port (default: 3000)
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_CLAIMS_PATH` - Claims document (default: mocks/claims.json)
//! * `API_NOTES_PATH` - Notes document (default: mocks/notes.json)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `AZURE_OPENAI_ENDPOINT` - Completion endpoint; unset selects mock mode
//! * `AZURE_OPENAI_API_KEY` - Completion key; unset selects mock mode
//! * `AZURE_OPENAI_DEPLOYMENT_NAME` - Deployment (default: gpt-35-turbo)
//! * `API_COMPLETION_TIMEOUT_SECS` - Per-attempt timeout (default: 30)

use std::net::SocketAddr;
use std::sync::Arc;

use domain_claims::SummaryGenerator;
use infra_external::{load_all, AzureOpenAiAdapter};
use interface_api::{config::ApiConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Either claim document is missing or malformed
/// - The completion client cannot be built
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level, config.json_logs());

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Claim Status API Server"
    );

    let store = load_all(&config.claims_path, &config.notes_path).map_err(|e| {
        tracing::error!(error = %e, "Failed to load claim documents");
        e
    })?;

    let generator = build_generator(&config)?;

    let claim_ids: Vec<&str> = store.claim_ids().map(|id| id.as_str()).collect();
    tracing::info!(available_claims = %claim_ids.join(", "), "Claims available");

    let app = create_router(AppState::new(store, generator));

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, health = %format!("http://{}/health", addr), "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Builds the summary generator, backed by Azure OpenAI when credentials are set.
fn build_generator(config: &ApiConfig) -> Result<SummaryGenerator, Box<dyn std::error::Error>> {
    match config.completion_settings() {
        Some(settings) => {
            let adapter = AzureOpenAiAdapter::new(settings)?;
            tracing::info!(deployment = %adapter.deployment(), "Azure OpenAI client configured");
            Ok(SummaryGenerator::new(Arc::new(adapter)))
        }
        None => {
            tracing::warn!("Azure OpenAI credentials not set, running in mock mode");
            Ok(SummaryGenerator::unconfigured())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output when `RUST_LOG` is unset
/// * `json` - Emit one JSON object per line instead of human-readable text
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
