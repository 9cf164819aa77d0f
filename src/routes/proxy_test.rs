use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::http::{Method, Uri};
use axum::routing::any;
use serde_json::{Value, json};

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

// =============================================================================
// pure helpers
// =============================================================================

#[test]
fn upstream_url_keeps_api_prefix_and_query() {
    assert_eq!(upstream_url("http://b:8000", "transform", None), "http://b:8000/api/transform");
    assert_eq!(upstream_url("http://b:8000/", "/test-ai", Some("x=1")), "http://b:8000/api/test-ai?x=1");
    assert_eq!(upstream_url("http://b:8000", "login", Some("")), "http://b:8000/api/login");
}

#[test]
fn hop_by_hop_headers_are_not_forwardable() {
    for name in ["connection", "host", "content-length", "transfer-encoding", "upgrade", "te"] {
        assert!(!forwardable(&HeaderName::from_static(name)), "{name} should be dropped");
    }
    for name in ["authorization", "content-type", "accept", "x-request-id"] {
        assert!(forwardable(&HeaderName::from_static(name)), "{name} should pass");
    }
}

#[test]
fn proxy_errors_carry_detail_status() {
    assert_eq!(ProxyError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let err = ProxyError::Upstream("refused".to_owned());
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.to_string(), "Backend unavailable: refused");
}

// =============================================================================
// end-to-end
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": header("authorization"),
        "content_type": header("content-type"),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [("x-ratelimit-remaining", "0")],
        Json(json!({ "detail": "Free tier exhausted" })),
    )
        .into_response()
}

async fn spawn_upstream() -> SocketAddr {
    serve(Router::new().route("/api/echo", any(echo)).route("/api/limited", any(limited))).await
}

async fn spawn_proxy(upstream: &str, body_limit_bytes: usize) -> SocketAddr {
    let config = ServerConfig { api_upstream: upstream.to_owned(), body_limit_bytes, ..ServerConfig::default() };
    let state = AppState { http: reqwest::Client::builder().no_proxy().build().unwrap(), config: Arc::new(config) };
    serve(api_routes(state)).await
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn forwards_method_query_headers_and_body() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&format!("http://{upstream}"), 1024).await;

    let resp = client()
        .post(format!("http://{proxy}/api/echo?style=cartoon"))
        .header("authorization", "Bearer tok")
        .header("content-type", "text/plain")
        .body("hello")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/echo");
    assert_eq!(body["query"], "style=cartoon");
    assert_eq!(body["authorization"], "Bearer tok");
    assert_eq!(body["content_type"], "text/plain");
    assert_eq!(body["body"], "hello");
}

#[tokio::test]
async fn get_without_auth_header_is_forwarded_as_is() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&format!("http://{upstream}/"), 1024).await;

    let body: Value = client().get(format!("http://{proxy}/api/echo")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["authorization"], Value::Null);
    assert_eq!(body["query"], Value::Null);
}

#[tokio::test]
async fn relays_error_status_headers_and_body() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&format!("http://{upstream}"), 1024).await;

    let resp = client().post(format!("http://{proxy}/api/limited")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.headers().get("x-ratelimit-remaining").unwrap(), "0");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Free tier exhausted" }));
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway_detail() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);
    let proxy = spawn_proxy(&format!("http://{dead}"), 1024).await;

    let resp = client().get(format!("http://{proxy}/api/test-ai")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("Backend unavailable"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&format!("http://{upstream}"), 16).await;

    let resp = client().post(format!("http://{proxy}/api/echo")).body(vec![b'x'; 64]).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn_proxy("http://127.0.0.1:9", 1024).await;
    let resp = client().get(format!("http://{proxy}/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
