mod config;
mod errors;
mod models;
mod recommendation;
mod routes;
mod state;
mod store;
mod synthesis;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::storage::FileStorage;
use crate::store::PreferenceStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waypoint API v{}", env!("CARGO_PKG_VERSION"));

    // File-backed storage port; the store hydrates saved roadmaps and any
    // in-progress snapshot from it at startup.
    let storage = Arc::new(FileStorage::new(&config.data_dir)?);
    let store = PreferenceStore::new(storage);
    info!(
        "Preference store hydrated: {} saved roadmap(s) from {}",
        store.saved_roadmaps.len(),
        config.data_dir
    );

    let state = AppState {
        store: Arc::new(RwLock::new(store)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
