mod catalog;
mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::extraction::KeywordSkillExtractor;
use crate::matching::MatchEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unusable env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog (optional; requests may also carry their own jobs)
    let catalog = match &config.job_catalog_path {
        Some(path) => JobCatalog::load(path).await?,
        None => {
            info!("JOB_CATALOG_PATH not set; starting with an empty catalog");
            JobCatalog::default()
        }
    };

    let match_config = config.match_config();
    info!(
        "Match engine: required weight {}, preferred weight {}, max tips {}",
        match_config.weights.required, match_config.weights.preferred, match_config.tips.max_tips
    );

    // Build app state
    let state = AppState {
        engine: Arc::new(MatchEngine::new(match_config)),
        extractor: Arc::new(KeywordSkillExtractor::new()?),
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
