//! Typed client for the log store service.

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::errors::ProxyError;

/// Headers that describe a single connection and must not be relayed.
/// `content-length` is recomputed from the (identical) body.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

pub fn relay_headers(src: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(src.len());
    for (name, value) in src {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Upstream response captured in full, relayed as-is.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl UpstreamResponse {
    async fn read(resp: reqwest::Response) -> Result<Self, ProxyError> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;
        Ok(Self { status, headers, body })
    }
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut res = Response::new(Body::from(self.body));
        *res.status_mut() = self.status;
        *res.headers_mut() = relay_headers(&self.headers);
        res
    }
}

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// No timeout is set: a stalled upstream stalls the caller.
    pub fn new(base_url: &str) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    pub async fn list_logs(&self) -> Result<UpstreamResponse, ProxyError> {
        self.relay(self.client.get(self.url("/logs"))).await
    }

    pub async fn create_log(&self, body: &serde_json::Value) -> Result<UpstreamResponse, ProxyError> {
        self.relay(self.client.post(self.url("/log")).json(body)).await
    }

    async fn relay(&self, req: reqwest::RequestBuilder) -> Result<UpstreamResponse, ProxyError> {
        let resp = req.send().await.map_err(|e| ProxyError::Network(e.to_string()))?;
        debug!(upstream = %resp.url(), status = %resp.status(), "upstream responded");
        UpstreamResponse::read(resp).await
    }
}
