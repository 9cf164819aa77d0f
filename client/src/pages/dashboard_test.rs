use super::*;

#[test]
fn stat_tiles_list_every_counter_in_order() {
    let stats = UserStatistics {
        cartoon: 1,
        sketch: 2,
        watercolor: 3,
        oilpaint: 4,
        ai_transformations: 5,
        total_transformations: 10,
    };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles.len(), 6);
    assert_eq!(tiles[0], ("Cartoon", 1));
    assert_eq!(tiles[3], ("Oil Paint", 4));
    assert_eq!(tiles[4], ("AI Transformations", 5));
    assert_eq!(tiles[5], ("Total Transformations", 10));
}

#[test]
fn ready_ai_reports_success() {
    let (kind, message) = ai_status_notice(&AiStatus { ready: true, message: None });
    assert_eq!(kind, ToastKind::Success);
    assert_eq!(message, "AI connection is working perfectly!");
}

#[test]
fn unready_ai_reports_backend_message() {
    let (kind, message) = ai_status_notice(&AiStatus { ready: false, message: Some("model loading".to_owned()) });
    assert_eq!(kind, ToastKind::Warning);
    assert_eq!(message, "AI connection issue: model loading");
}
