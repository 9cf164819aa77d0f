use super::*;

#[test]
fn endpoint_url_prepends_api_prefix() {
    assert_eq!(endpoint_url("/login"), "/api/login");
    assert_eq!(endpoint_url("/test-ai"), "/api/test-ai");
}

#[test]
fn bearer_header_attached_when_token_present() {
    assert_eq!(bearer_header(Some("abc"), Auth::Bearer), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_header_skipped_on_opt_out() {
    assert_eq!(bearer_header(Some("abc"), Auth::Skip), None);
}

#[test]
fn bearer_header_skipped_without_token() {
    assert_eq!(bearer_header(None, Auth::Bearer), None);
    assert_eq!(bearer_header(Some(""), Auth::Bearer), None);
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn success_returns_parsed_body() {
    let value = interpret_response(200, r#"{"ready":true}"#).unwrap();
    assert_eq!(value, serde_json::json!({ "ready": true }));
}

#[test]
fn rate_limit_carries_server_detail_and_redirects() {
    let err = interpret_response(429, r#"{"detail":"Free tier limit reached"}"#).unwrap_err();
    assert_eq!(err, ApiError::RateLimited { notice: "Free tier limit reached".to_owned() });
    assert_eq!(err.to_string(), "Rate limit exceeded");
    assert_eq!(err.redirect_target(), Some(PAYMENT_PATH));
}

#[test]
fn rate_limit_with_unparseable_body_uses_fallback_notice() {
    let err = interpret_response(429, "<html>slow down</html>").unwrap_err();
    assert_eq!(err, ApiError::RateLimited { notice: "Rate limit exceeded".to_owned() });
    assert_eq!(err.redirect_target(), Some("/payment"));
}

#[test]
fn error_status_surfaces_detail() {
    let err = interpret_response(401, r#"{"detail":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.redirect_target(), None);
}

#[test]
fn error_status_without_detail_uses_generic_message() {
    assert_eq!(
        interpret_response(500, r#"{"error":"boom"}"#).unwrap_err(),
        ApiError::Server("Request failed".to_owned())
    );
    assert_eq!(
        interpret_response(502, "Bad Gateway").unwrap_err(),
        ApiError::Server("Request failed".to_owned())
    );
}

#[test]
fn success_status_with_non_json_body_is_decode_error() {
    assert!(matches!(interpret_response(200, "ok"), Err(ApiError::Decode(_))));
}

#[test]
fn transform_body_keeps_variant_order_through_decode() {
    let body = r#"{"success":true,"image":"A","variants":{"light":"1","medium":"2","heavy":"3","anime":"4"},"ai_used":false}"#;
    let result: TransformResult = decode(interpret_response(200, body).unwrap()).unwrap();
    assert_eq!(result.variants.names(), ["light", "medium", "heavy", "anime"]);
}

#[test]
fn decode_rejects_wrong_shape() {
    let err = decode::<LoginResponse>(serde_json::json!({ "message": "hi" })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Request builders
// =============================================================

#[test]
fn login_request_skips_auth_and_posts_credentials() {
    let req = login_request("ann", "secret123");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.endpoint, "/login");
    assert_eq!(req.auth, Auth::Skip);
    assert_eq!(req.field("username"), Some("ann"));
    assert_eq!(req.field("password"), Some("secret123"));
    assert!(!req.attach_file);
}

#[test]
fn register_request_skips_auth() {
    let req = register_request("bob", "hunter2hunter2");
    assert_eq!(req.endpoint, "/register");
    assert_eq!(req.auth, Auth::Skip);
}

#[test]
fn transform_request_attaches_file_style_and_flag() {
    let req = transform_request(Style::Watercolor, Processing::Ai, None);
    assert_eq!(req.endpoint, "/transform");
    assert_eq!(req.auth, Auth::Bearer);
    assert!(req.attach_file);
    assert_eq!(req.field("style"), Some("watercolor"));
    assert_eq!(req.field("use_ai"), Some("true"));
    assert_eq!(req.field("intensity"), None);
}

#[test]
fn transform_request_with_params_adds_slider_values() {
    let params = FilterParams { intensity: 1.5, blur: 9, edge_threshold: 150 };
    let req = transform_request(Style::Sketch, Processing::Opencv, Some(params));
    assert_eq!(req.field("use_ai"), Some("false"));
    assert_eq!(req.field("intensity"), Some("1.5"));
    assert_eq!(req.field("blur"), Some("9"));
    assert_eq!(req.field("edge_threshold"), Some("150"));
}

#[test]
fn test_ai_request_is_authenticated_get() {
    let req = test_ai_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.endpoint, "/test-ai");
    assert_eq!(req.auth, Auth::Bearer);
    assert!(req.fields.is_empty());
}

#[test]
fn account_change_requests_carry_security_answer() {
    let req = change_username_request("newname", "Fluffy");
    assert_eq!(req.endpoint, "/change-username");
    assert_eq!(req.field("new_username"), Some("newname"));
    assert_eq!(req.field("security_answer"), Some("Fluffy"));

    let req = change_password_request("old-pass", "new-pass-123", "Fluffy");
    assert_eq!(req.endpoint, "/change-password");
    assert_eq!(req.field("current_password"), Some("old-pass"));
    assert_eq!(req.field("new_password"), Some("new-pass-123"));
    assert_eq!(req.field("security_answer"), Some("Fluffy"));
}
