//! Library-level tests for the mutation API against a real local store.

use chrono::NaiveDate;
use ractivities::core::mutate;
use ractivities::errors::AppError;
use ractivities::models::activity::Proof;
use ractivities::models::{ActivityRecord, Reflection, Status};
use ractivities::store::{LocalStore, RecordStore};
use tempfile::TempDir;

fn record(id: &str, title: &str, hours: u32) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        theme: "Security".to_string(),
        title: title.to_string(),
        kind: "Other".to_string(),
        hours,
        date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("test date"),
        status: Status::Draft,
        proof: Proof::Plain(String::new()),
        description: String::new(),
        reflection: Reflection::default(),
        skills: Vec::new(),
    }
}

fn open_store(dir: &TempDir) -> LocalStore {
    let path = dir.path().join("store.sqlite");
    let mut store = LocalStore::open(&path.to_string_lossy()).expect("open store");
    // Start from a known empty list instead of the default seed
    store.save(&[]).expect("reset store");
    store
}

#[test]
fn create_assigns_a_fresh_id_and_appends() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    let stored = mutate::create(&mut store, record("", "First", 3)).expect("create");
    assert!(stored.id.starts_with("act_"));

    let records = store.load().expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, stored.id);
}

#[test]
fn create_keeps_a_caller_provided_id() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    let stored = mutate::create(&mut store, record("act_fixed", "Kept", 2)).expect("create");
    assert_eq!(stored.id, "act_fixed");
}

#[test]
fn update_preserves_id_and_position() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    for (i, title) in ["One", "Two", "Three"].iter().enumerate() {
        mutate::create(&mut store, record(&format!("act_{i}"), title, 1)).expect("create");
    }

    let mut replacement = record("ignored-by-update", "Two updated", 7);
    replacement.theme = "Networks".into();
    mutate::update(&mut store, "act_1", replacement).expect("update");

    let records = store.load().expect("load");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].id, "act_1");
    assert_eq!(records[1].title, "Two updated");
    assert_eq!(records[1].hours, 7);
    assert_eq!(records[0].title, "One");
    assert_eq!(records[2].title, "Three");
}

#[test]
fn update_unknown_id_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    let err = mutate::update(&mut store, "act_missing", record("", "X", 1)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn delete_removes_only_the_target() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    for i in 0..3 {
        mutate::create(&mut store, record(&format!("act_{i}"), "Item", 1)).expect("create");
    }

    let removed = mutate::delete(&mut store, "act_1").expect("delete");
    assert_eq!(removed.id, "act_1");

    let records = store.load().expect("load");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.id != "act_1"));
}

#[test]
fn delete_unknown_id_keeps_length() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = open_store(&dir);

    mutate::create(&mut store, record("act_0", "Only", 1)).expect("create");

    let err = mutate::delete(&mut store, "act_ghost").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(store.load().expect("load").len(), 1);
}

#[test]
fn mutations_persist_across_reopen() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("store.sqlite");

    {
        let mut store = LocalStore::open(&path.to_string_lossy()).expect("open");
        store.save(&[]).expect("reset");
        mutate::create(&mut store, record("act_keep", "Survivor", 4)).expect("create");
    }

    let mut reopened = LocalStore::open(&path.to_string_lossy()).expect("reopen");
    let records = reopened.load().expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "act_keep");
    assert_eq!(records[0].hours, 4);
}

#[test]
fn corrupt_payload_falls_back_to_seed() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("store.sqlite");

    {
        let store = LocalStore::open(&path.to_string_lossy()).expect("open");
        store
            .conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES ('portfolio_activities', 'not-json')",
                [],
            )
            .expect("corrupt kv");
    }

    let mut store = LocalStore::open(&path.to_string_lossy()).expect("reopen");
    let records = store.load().expect("load recovers");
    assert_eq!(records.len(), 4, "default seed expected after corruption");
}
