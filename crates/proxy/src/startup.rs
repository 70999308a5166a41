use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tracing::info;

use crate::routes::{self, ProxyState};
use crate::upstream::UpstreamClient;

/// Public entry: build the proxy app and serve it until the listener fails
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let p = &cfg.proxy;
    common::env::warn_if_missing(&p.index_path).await;

    let upstream = UpstreamClient::new(&p.upstream_url)?;
    info!(upstream = %upstream.base_url(), "forwarding to log store");
    let app: Router = routes::build_router(ProxyState { upstream }, &p.index_path);

    let addr: SocketAddr = p.bind_addr().parse()?;
    info!(%addr, "starting proxy service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
