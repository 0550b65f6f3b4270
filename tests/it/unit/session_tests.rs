//! Tests for the session store lifecycle.

use chartboard::session::{Session, SessionStore};

fn temp_store() -> (tempfile::TempDir, SessionStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::with_path(dir.path().join("session.json"));
    (dir, store)
}

#[test]
fn load_without_file_is_signed_out() {
    let (_dir, store) = temp_store();

    let session = store.load();

    assert_eq!(session, Session::default());
    assert!(!session.is_authenticated());
}

#[test]
fn persist_then_load_round_trips_token() {
    let (_dir, store) = temp_store();

    let persisted = store.persist("jwt-abc").unwrap();
    assert!(persisted.is_authenticated());

    let loaded = store.load();
    assert_eq!(loaded.token.as_deref(), Some("jwt-abc"));
}

#[test]
fn clear_signs_out_and_is_idempotent() {
    let (_dir, store) = temp_store();
    store.persist("jwt-abc").unwrap();

    let cleared = store.clear().unwrap();
    assert!(!cleared.is_authenticated());
    assert!(!store.load().is_authenticated());

    // Clearing an already-cleared store is fine
    store.clear().unwrap();
}

#[test]
fn malformed_session_file_falls_back_to_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = SessionStore::with_path(path);
    assert!(!store.load().is_authenticated());
}
