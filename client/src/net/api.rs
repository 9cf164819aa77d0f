//! REST client for the transformation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with multipart
//! `FormData` bodies.
//! Server-side (SSR) and native tests: requests fail with a network error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; the error's `Display` is the
//! text shown to the user. A 429 additionally raises a warning toast and
//! navigates to the payment page before the call fails.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::types::{AiStatus, ChangeResponse, FilterParams, LoginResponse, Processing, Style, TransformResult};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState, notify};

/// Prefix prepended to every backend endpoint.
pub const API_PREFIX: &str = "/api";
/// Page the browser is sent to when the backend rate-limits the user.
pub const PAYMENT_PATH: &str = "/payment";

#[cfg(any(test, feature = "hydrate"))]
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";
#[cfg(any(test, feature = "hydrate"))]
const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 429. `notice` is the server's message for the warning toast.
    #[error("Rate limit exceeded")]
    RateLimited { notice: String },
    /// Non-success status; carries `detail` or a generic fallback.
    #[error("{0}")]
    Server(String),
    /// Transport failure before a status was received.
    #[error("{0}")]
    Network(String),
    /// Success status with a body that does not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Page the browser must navigate to for this error, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::RateLimited { .. } => Some(PAYMENT_PATH),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Whether the bearer token is attached to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    Skip,
}

/// A backend request before it is turned into a browser `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: &'static str,
    pub auth: Auth,
    /// Multipart text fields, in append order.
    pub fields: Vec<(&'static str, String)>,
    /// Append the session's pending upload as the `file` part.
    pub attach_file: bool,
}

impl ApiRequest {
    fn post(endpoint: &'static str, auth: Auth, fields: Vec<(&'static str, String)>) -> Self {
        Self { method: Method::Post, endpoint, auth, fields, attach_file: false }
    }

    #[cfg(test)]
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint_url(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: Option<&str>, auth: Auth) -> Option<String> {
    match (auth, token) {
        (Auth::Bearer, Some(token)) if !token.is_empty() => Some(format!("Bearer {token}")),
        _ => None,
    }
}

/// Map a status code and raw body to the JSON payload or an `ApiError`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<serde_json::Value, ApiError> {
    if status == 429 {
        let notice = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(|| RATE_LIMIT_MESSAGE.to_owned());
        return Err(ApiError::RateLimited { notice });
    }
    let parsed = serde_json::from_str::<serde_json::Value>(body);
    if !(200..300).contains(&status) {
        let detail = parsed
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
            .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned());
        return Err(ApiError::Server(detail));
    }
    parsed.map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) fn login_request(username: &str, password: &str) -> ApiRequest {
    ApiRequest::post(
        "/login",
        Auth::Skip,
        vec![("username", username.to_owned()), ("password", password.to_owned())],
    )
}

pub(crate) fn register_request(username: &str, password: &str) -> ApiRequest {
    ApiRequest::post(
        "/register",
        Auth::Skip,
        vec![("username", username.to_owned()), ("password", password.to_owned())],
    )
}

/// Build a `/transform` request; `params` is present only for a re-apply.
pub(crate) fn transform_request(style: Style, processing: Processing, params: Option<FilterParams>) -> ApiRequest {
    let mut fields = vec![
        ("style", style.as_str().to_owned()),
        ("use_ai", processing.uses_ai().to_string()),
    ];
    if let Some(params) = params {
        fields.push(("intensity", params.intensity.to_string()));
        fields.push(("blur", params.blur.to_string()));
        fields.push(("edge_threshold", params.edge_threshold.to_string()));
    }
    ApiRequest { attach_file: true, ..ApiRequest::post("/transform", Auth::Bearer, fields) }
}

pub(crate) fn test_ai_request() -> ApiRequest {
    ApiRequest { method: Method::Get, endpoint: "/test-ai", auth: Auth::Bearer, fields: Vec::new(), attach_file: false }
}

pub(crate) fn change_username_request(new_username: &str, security_answer: &str) -> ApiRequest {
    ApiRequest::post(
        "/change-username",
        Auth::Bearer,
        vec![
            ("new_username", new_username.to_owned()),
            ("security_answer", security_answer.to_owned()),
        ],
    )
}

pub(crate) fn change_password_request(current_password: &str, new_password: &str, security_answer: &str) -> ApiRequest {
    ApiRequest::post(
        "/change-password",
        Auth::Bearer,
        vec![
            ("current_password", current_password.to_owned()),
            ("new_password", new_password.to_owned()),
            ("security_answer", security_answer.to_owned()),
        ],
    )
}

/// Backend client bound to the session (for the token) and the toast queue
/// (for the rate-limit notice).
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: RwSignal<Session>,
    toasts: RwSignal<ToastState>,
}

impl ApiClient {
    #[must_use]
    pub fn new(session: RwSignal<Session>, toasts: RwSignal<ToastState>) -> Self {
        Self { session, toasts }
    }

    /// Build a client from the `Session` and `ToastState` contexts.
    #[must_use]
    pub fn from_context() -> Self {
        Self::new(expect_context::<RwSignal<Session>>(), expect_context::<RwSignal<ToastState>>())
    }

    /// Send `request` and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` for transport failures, non-success statuses
    /// and undecodable bodies. On 429 the payment redirect has already been
    /// issued when this returns.
    pub async fn call(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let token = self.session.get_untracked().token;
        let result = send(&request, token.as_deref()).await;
        if let Err(err) = &result {
            leptos::logging::warn!("api {} failed: {err}", request.endpoint);
            if let ApiError::RateLimited { notice } = err {
                notify(self.toasts, ToastKind::Warning, notice.clone());
            }
            if let Some(path) = err.redirect_target() {
                navigate_away(path);
            }
        }
        result
    }

    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        decode(self.call(login_request(username, password)).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.call(register_request(username, password)).await.map(|_| ())
    }

    /// Submit the pending upload for transformation.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn transform(
        &self,
        style: Style,
        processing: Processing,
        params: Option<FilterParams>,
    ) -> Result<TransformResult, ApiError> {
        decode(self.call(transform_request(style, processing, params)).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn test_ai(&self) -> Result<AiStatus, ApiError> {
        decode(self.call(test_ai_request()).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn change_username(&self, new_username: &str, security_answer: &str) -> Result<ChangeResponse, ApiError> {
        decode(self.call(change_username_request(new_username, security_answer)).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        security_answer: &str,
    ) -> Result<ChangeResponse, ApiError> {
        decode(self.call(change_password_request(current_password, new_password, security_answer)).await?)
    }
}

async fn send(request: &ApiRequest, token: Option<&str>) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint_url(request.endpoint);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(value) = bearer_header(token, request.auth) {
            builder = builder.header("Authorization", &value);
        }
        let response = match request.method {
            Method::Post => {
                let form = build_form_data(request)?;
                builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?.send().await
            }
            Method::Get => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(request: &ApiRequest) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    if request.attach_file {
        match crate::util::upload::with_pending_file(|file| form.append_with_blob_and_filename("file", file, &file.name())) {
            Some(appended) => appended.map_err(js_error)?,
            None => return Err(ApiError::Network("no image selected".to_owned())),
        }
    }
    for (name, value) in &request.fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn navigate_away(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
