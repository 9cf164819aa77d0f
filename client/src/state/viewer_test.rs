use super::*;

fn sample(title: &str) -> ViewerContent {
    ViewerContent::for_image(
        "data:image/png;base64,AAA".to_owned(),
        "Result".to_owned(),
        title.to_owned(),
        Some("AAA".to_owned()),
        "reframe_cartoon_20261018T101500.png".to_owned(),
    )
}

#[test]
fn viewer_starts_closed() {
    let state = ViewerState::default();
    assert!(!state.is_open());
    assert!(state.content().is_none());
}

#[test]
fn open_then_close() {
    let mut state = ViewerState::default();
    state.open(sample("Transformed"));
    assert!(state.is_open());
    state.close();
    assert_eq!(state, ViewerState::Closed);
}

#[test]
fn opening_while_open_replaces_content() {
    let mut state = ViewerState::default();
    state.open(sample("First"));
    state.open(sample("Second"));
    assert_eq!(state.content().map(|c| c.title.as_str()), Some("Second"));
}

#[test]
fn image_with_payload_downloads_data() {
    let content = sample("Transformed");
    assert_eq!(
        content.download,
        DownloadSource::Data {
            base64: "AAA".to_owned(),
            filename: "reframe_cartoon_20261018T101500.png".to_owned()
        }
    );
}

#[test]
fn image_without_payload_downloads_from_src() {
    let content = ViewerContent::for_image(
        "data:image/jpeg;base64,ZZZ".to_owned(),
        "Original".to_owned(),
        "Original".to_owned(),
        None,
        "original_20261018T101500.png".to_owned(),
    );
    assert_eq!(
        content.download,
        DownloadSource::Url {
            href: "data:image/jpeg;base64,ZZZ".to_owned(),
            filename: "original_20261018T101500.png".to_owned()
        }
    );
}

#[test]
fn variant_content_uses_humanized_title() {
    let content = ViewerContent::for_variant("softEdges", "QQQ", Style::Sketch, "20261018T101500");
    assert_eq!(content.title, "soft Edges Variant");
    assert_eq!(content.alt, "softEdges variant");
    assert_eq!(content.src, "data:image/png;base64,QQQ");
    assert_eq!(
        content.download,
        DownloadSource::Data {
            base64: "QQQ".to_owned(),
            filename: "reframe_sketch_softEdges_20261018T101500.png".to_owned()
        }
    );
}
