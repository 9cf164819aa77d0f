use super::*;

#[test]
fn style_parse_accepts_form_values() {
    assert_eq!(Style::parse("cartoon"), Some(Style::Cartoon));
    assert_eq!(Style::parse("oilpaint"), Some(Style::OilPaint));
    assert_eq!(Style::parse("Oil Paint"), None);
    assert_eq!(Style::parse(""), None);
}

#[test]
fn style_serializes_as_backend_value() {
    assert_eq!(serde_json::to_value(Style::OilPaint).unwrap(), serde_json::json!("oilpaint"));
    assert_eq!(serde_json::to_value(Style::Watercolor).unwrap(), serde_json::json!("watercolor"));
}

#[test]
fn style_default_is_cartoon() {
    assert_eq!(Style::default(), Style::Cartoon);
}

#[test]
fn processing_parse_and_ai_flag() {
    assert_eq!(Processing::parse("ai"), Some(Processing::Ai));
    assert_eq!(Processing::parse("opencv"), Some(Processing::Opencv));
    assert_eq!(Processing::parse("gpu"), None);
    assert!(Processing::Ai.uses_ai());
    assert!(!Processing::Opencv.uses_ai());
}

#[test]
fn filter_params_default_matches_backend_defaults() {
    let params = FilterParams::default();
    assert!((params.intensity - 1.0).abs() < f64::EPSILON);
    assert_eq!(params.blur, 7);
    assert_eq!(params.edge_threshold, 100);
}

#[test]
fn transform_result_decodes_without_variants() {
    let body = serde_json::json!({ "success": true, "image": "aGVsbG8=", "ai_used": true });
    let result: TransformResult = serde_json::from_value(body).unwrap();
    assert!(result.success);
    assert!(result.ai_used);
    assert!(result.variants.is_empty());
}

#[test]
fn transform_result_decodes_variants_map() {
    let body = serde_json::json!({
        "success": true,
        "image": "AAA",
        "style": "sketch",
        "variants": { "light": "BBB", "strong": "CCC" },
        "ai_used": false
    });
    let result: TransformResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.variants.len(), 2);
    assert_eq!(result.variants.get("strong").map(String::as_str), Some("CCC"));
}

#[test]
fn variants_keep_backend_order() {
    let body = r#"{"success":true,"image":"A","variants":{"light":"1","medium":"2","heavy":"3","anime":"4"}}"#;
    let result: TransformResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.variants.names(), ["light", "medium", "heavy", "anime"]);
}

#[test]
fn variants_reject_non_string_images() {
    let body = r#"{"success":true,"image":"A","variants":{"light":1}}"#;
    assert!(serde_json::from_str::<TransformResult>(body).is_err());
}

#[test]
fn variant_insert_replaces_in_place() {
    let mut variants: Variants = [("b", "1"), ("a", "2")].into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
    variants.insert("b".to_owned(), "3".to_owned());
    assert_eq!(variants.names(), ["b", "a"]);
    assert_eq!(variants.get("b").map(String::as_str), Some("3"));
}

#[test]
fn login_response_ignores_token_type() {
    let body = serde_json::json!({ "access_token": "t", "token_type": "bearer", "username": "ann" });
    let login: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(login, LoginResponse { access_token: "t".to_owned(), username: "ann".to_owned() });
}

#[test]
fn ai_status_message_is_optional() {
    let status: AiStatus = serde_json::from_value(serde_json::json!({ "ready": true })).unwrap();
    assert!(status.ready);
    assert!(status.message.is_none());
}

#[test]
fn change_response_tolerates_extra_message() {
    let body = r#"{"success":true,"message":"Username changed"}"#;
    let parsed: ChangeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed, ChangeResponse { success: true });
}
