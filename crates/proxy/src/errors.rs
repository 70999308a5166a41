use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Network(String),
    #[error("reading upstream response failed: {0}")]
    Body(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("http client setup failed: {0}")]
    Client(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, title) = match &self {
            ProxyError::Network(_) | ProxyError::Body(_) => (StatusCode::BAD_GATEWAY, "Upstream Error"),
            ProxyError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ProxyError::Client(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        let msg = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %msg, "proxy request failed");
        }
        (status, Json(serde_json::json!({"error": title, "message": msg}))).into_response()
    }
}
