use serde::Deserialize;

use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    count: u32,
}

#[test]
fn json_values_round_trip() {
    let store = MemoryStore::default();
    save_json(&store, "k", &Sample { count: 3 });
    assert_eq!(store.get("k").as_deref(), Some(r#"{"count":3}"#));
    assert_eq!(load_json::<Sample>(&store, "k"), Some(Sample { count: 3 }));
}

#[test]
fn missing_or_malformed_entries_load_as_none() {
    let store = MemoryStore::default();
    assert_eq!(load_json::<Sample>(&store, "absent"), None);
    store.set("bad", "{count:");
    assert_eq!(load_json::<Sample>(&store, "bad"), None);
}

#[test]
fn borrowed_store_writes_through() {
    let store = MemoryStore::default();
    save_json(&&store, "k", &Sample { count: 1 });
    assert_eq!(load_json::<Sample>(&store, "k"), Some(Sample { count: 1 }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}
