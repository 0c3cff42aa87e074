//! `/api/*` forwarding to the directory backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever calls origin-relative `/api/...` paths. This handler
//! relays each GET to `{API_UPSTREAM_URL}/api/{path}` with the query string
//! intact and passes status, `content-type`, and body back unchanged. Only a
//! transport failure produces a response of our own (`502`).

use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The upstream request could not be sent or timed out.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream response body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Join the upstream origin, the captured `/api/` remainder, and the raw query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{base}/api/{path}?{q}"),
        _ => format!("{base}/api/{path}"),
    }
}

/// `GET /api/{*path}` — forward to the configured backend.
pub async fn forward_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_upstream_url, &path, query.as_deref());

    let resp = state
        .http
        .get(&url)
        .header(reqwest::header::ACCEPT, DEFAULT_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned();
    let body = resp.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "api request proxied");
    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
