mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;
mod ui;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::QaGenerator;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Prep API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model backend; the credential goes to the generator
    let gemini = GeminiClient::new(config.gemini_model.clone(), config.gemini_api_base.clone());
    info!("Gemini client initialized (model: {})", gemini.model());

    let generator = QaGenerator::new(config.gemini_api_key.clone(), Arc::new(gemini));
    if !generator.has_credential() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until it is");
    }

    let state = AppState { generator };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
