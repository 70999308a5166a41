use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    services::ServeFile,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ProxyError;
use crate::upstream::{UpstreamClient, UpstreamResponse};

#[derive(Clone)]
pub struct ProxyState {
    pub upstream: UpstreamClient,
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// GET /logs, relayed from the log store.
pub async fn get_logs(State(state): State<ProxyState>) -> Result<UpstreamResponse, ProxyError> {
    state.upstream.list_logs().await
}

/// POST /add_log, forwarded to the log store's `/log`.
pub async fn add_log(
    State(state): State<ProxyState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<UpstreamResponse, ProxyError> {
    let Json(body) = payload.map_err(|e| ProxyError::BadRequest(e.body_text()))?;
    state.upstream.create_log(&body).await
}

/// Same-origin with the index page, so no CORS layer: relayed headers stay as the upstream sent them.
pub fn build_router(state: ProxyState, index_path: &str) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_path))
        .route("/health", get(health))
        .route("/logs", get(get_logs))
        .route("/add_log", post(add_log))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
