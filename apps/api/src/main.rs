mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::ClauseAnalyzer;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Specter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the oracle client
    let gemini = GeminiClient::new(config.google_api_key.clone())
        .with_base_url(config.gemini_api_base.clone())
        .with_model(config.gemini_model.clone())
        .with_json_mode(config.gemini_json_mode);
    if gemini.has_credential() {
        info!(
            "Gemini client initialized (model: {}, json mode: {}, timeout: {}s)",
            gemini.model(),
            config.gemini_json_mode,
            config.llm_timeout.as_secs()
        );
    } else {
        warn!("GOOGLE_API_KEY is not set; analysis requests will fail with 503");
    }

    let analyzer = Arc::new(ClauseAnalyzer::new(Arc::new(gemini), config.llm_timeout));

    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    // The add-in is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
