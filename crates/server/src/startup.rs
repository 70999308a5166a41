use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::log_store::LogStore;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Prepare storage (data dir + `logs` table) and return the shared state.
pub async fn prepare_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    if let Some(path) = cfg.database.sqlite_path() {
        common::env::ensure_data_dir(path).await?;
    }
    let store = LogStore::new(cfg.database.clone());
    store.initialize().await?;
    info!(url = %cfg.database.url, "storage initialized");
    Ok(ServerState { store })
}

/// Public entry: build the app and run the log store HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = prepare_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting log store service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
