mod config;
mod errors;
mod jobs;
mod models;
mod routes;
mod state;

use anyhow::Result;
use chrono::Utc;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::jobs::gateway::JobGateway;
use crate::jobs::remote::{JSearchClient, JobSource};
use crate::jobs::store::RecordStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job query API v{}", env!("CARGO_PKG_VERSION"));

    // Record Store is built once and never mutated
    let store = Arc::new(RecordStore::seeded(Utc::now().timestamp())?);
    info!("Record store loaded ({} listings)", store.len());

    // Remote source is optional; without credentials every query is served locally
    let remote: Option<Arc<dyn JobSource>> = match &config.remote {
        Some(remote_config) => {
            let client = JSearchClient::new(remote_config, config.remote_timeout)?;
            info!(
                "Remote job source enabled ({}, timeout {:?})",
                remote_config.api_host, config.remote_timeout
            );
            Some(Arc::new(client) as Arc<dyn JobSource>)
        }
        None => {
            warn!("RAPIDAPI_KEY / RAPIDAPI_HOST not set, remote job source disabled");
            None
        }
    };

    let gateway = JobGateway::new(store, remote, config.remote_timeout);

    // Build app state
    let state = AppState {
        gateway: Arc::new(gateway),
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
