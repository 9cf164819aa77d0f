//! Same-origin forwarding of `/api/*` to the transformation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to this server. Requests under `/api`
//! are relayed to `REFRAME_API_UPSTREAM` with method, path, query, body and
//! end-to-end headers intact; the backend's status, headers and body come
//! back unchanged. When the backend cannot be reached the client still gets
//! its usual `{ "detail": ... }` error body.

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Connection-scoped headers that must not be relayed in either direction.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Request body too large")]
    BodyTooLarge,
    #[error("Backend unavailable: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

#[must_use]
pub fn forwardable(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers from `source`.
fn filtered(source: &HeaderMap) -> HeaderMap {
    source.iter().filter(|(name, _)| forwardable(name)).map(|(n, v)| (n.clone(), v.clone())).collect()
}

/// Backend URL for a request to `/api/{path}`.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{base}/api/{path}?{q}"),
        _ => format!("{base}/api/{path}"),
    }
}

/// `ANY /api/{*path}`
///
/// # Errors
///
/// [`ProxyError::BodyTooLarge`] past the configured body limit;
/// [`ProxyError::Upstream`] when the backend cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.config.api_upstream, &path, parts.uri.query());
    let body = to_bytes(body, state.config.body_limit_bytes).await.map_err(|_| ProxyError::BodyTooLarge)?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(filtered(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %path, method = %parts.method, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = filtered(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %path, "upstream body read failed");
        ProxyError::Upstream(e.to_string())
    })?;
    tracing::debug!(%path, status = status.as_u16(), bytes = bytes.len(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;
