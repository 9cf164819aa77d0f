use super::*;
use crate::util::storage::MemoryStore;

fn answer(question: &str, answer: &str) -> SecurityAnswer {
    SecurityAnswer { question: question.to_owned(), answer: answer.to_owned() }
}

// =============================================================
// statistics
// =============================================================

#[test]
fn record_known_style_with_ai() {
    let mut stats = UserStatistics::default();
    stats.record("cartoon", true);
    assert_eq!(
        stats,
        UserStatistics { cartoon: 1, total_transformations: 1, ai_transformations: 1, ..UserStatistics::default() }
    );
}

#[test]
fn record_unknown_style_counts_total_only() {
    let mut stats = UserStatistics::default();
    stats.record("unknown-style", false);
    assert_eq!(stats, UserStatistics { total_transformations: 1, ..UserStatistics::default() });
}

#[test]
fn stats_use_camel_case_keys() {
    let stats = UserStatistics { oilpaint: 2, ai_transformations: 1, total_transformations: 3, ..UserStatistics::default() };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["oilpaint"], 2);
    assert_eq!(json["aiTransformations"], 1);
    assert_eq!(json["totalTransformations"], 3);
}

#[test]
fn partial_stats_record_reads_missing_as_zero() {
    let mem = MemoryStore::default();
    mem.set("userStats_ada", r#"{"sketch":4}"#);
    let stats = ProfileStore::new(&mem).load_stats("ada");
    assert_eq!(stats.sketch, 4);
    assert_eq!(stats.for_style(Style::Sketch), 4);
    assert_eq!(stats.total_transformations, 0);
}

#[test]
fn malformed_stats_fall_back_to_zero() {
    let mem = MemoryStore::default();
    mem.set("userStats_ada", "not json");
    assert_eq!(ProfileStore::new(&mem).load_stats("ada"), UserStatistics::default());
}

#[test]
fn record_transformation_requires_user() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    assert_eq!(profiles.record_transformation(None, "cartoon", true), None);
    assert!(mem.entries.borrow().is_empty());
}

#[test]
fn record_transformation_persists() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    profiles.record_transformation(Some("ada"), "sketch", false);
    let stats = profiles.record_transformation(Some("ada"), "sketch", true).unwrap();
    assert_eq!(stats.sketch, 2);
    assert_eq!(stats.ai_transformations, 1);
    assert_eq!(profiles.load_stats("ada"), stats);
}

// =============================================================
// preferences
// =============================================================

#[test]
fn preferences_round_trip_under_user_key() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    assert_eq!(profiles.load_preferences("ada"), None);

    profiles.save_preferences("ada", &UserPreferences::new(Processing::Ai, Style::Watercolor));
    let raw = mem.get("userPrefs_ada").unwrap();
    assert!(raw.contains("\"defaultProcessing\":\"ai\""));

    let prefs = profiles.load_preferences("ada").unwrap();
    assert_eq!(prefs.processing(), Some(Processing::Ai));
    assert_eq!(prefs.style(), Some(Style::Watercolor));
}

#[test]
fn unknown_preference_values_parse_as_none() {
    let prefs = UserPreferences { default_processing: "gpu".into(), default_style: "pixel".into() };
    assert_eq!(prefs.processing(), None);
    assert_eq!(prefs.style(), None);
}

// =============================================================
// security
// =============================================================

#[test]
fn security_answer_is_stored_lowercase_and_checked_case_insensitively() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    let stored = profiles.set_security("ada", &answer(SECURITY_QUESTIONS[0], "Rex"));
    assert_eq!(stored.answer, "rex");
    assert!(profiles.load_security("ada").is_configured());

    assert_eq!(profiles.verify_security_answer("ada", "REX"), Ok(()));
    assert_eq!(profiles.verify_security_answer("ada", "fido"), Err(INCORRECT_ANSWER));
}

#[test]
fn verify_fails_without_stored_answer() {
    let mem = MemoryStore::default();
    assert_eq!(ProfileStore::new(&mem).verify_security_answer("ada", "anything"), Err(INCORRECT_ANSWER));
}

// =============================================================
// rename / clear
// =============================================================

#[test]
fn migrate_moves_stats_and_security_but_not_prefs() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    profiles.record_transformation(Some("old"), "cartoon", false);
    profiles.set_security("old", &answer("Q?", "blue"));
    profiles.save_preferences("old", &UserPreferences::new(Processing::Opencv, Style::Sketch));

    profiles.migrate_user("old", "new");

    assert_eq!(profiles.load_stats("new").cartoon, 1);
    assert_eq!(profiles.load_security("new").answer, "blue");
    assert!(mem.get("userStats_old").is_none());
    assert!(mem.get("userSecurity_old").is_none());
    assert!(mem.get("userPrefs_old").is_some());
    assert!(mem.get("userPrefs_new").is_none());
}

#[test]
fn migrate_without_records_writes_nothing() {
    let mem = MemoryStore::default();
    ProfileStore::new(&mem).migrate_user("old", "new");
    assert!(mem.entries.borrow().is_empty());
}

#[test]
fn clear_user_removes_only_that_user() {
    let mem = MemoryStore::default();
    let profiles = ProfileStore::new(&mem);
    for user in ["ada", "bob"] {
        profiles.record_transformation(Some(user), "cartoon", false);
        profiles.save_preferences(user, &UserPreferences::default());
        profiles.set_security(user, &answer("Q?", "blue"));
    }

    profiles.clear_user("ada");

    assert_eq!(profiles.load_stats("ada"), UserStatistics::default());
    assert_eq!(profiles.load_preferences("ada"), None);
    assert!(!profiles.load_security("ada").is_configured());
    assert_eq!(mem.entries.borrow().len(), 3);
}
