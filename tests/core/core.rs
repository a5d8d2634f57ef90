use dercor::core::db::studio_db_path;
use dercor::core::schemas;
use dercor::core::store::{Session, Store};
use dercor::initialize_store;
use dercor::plugins::catalog::list_items;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_double_initialization_is_idempotent() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();

    initialize_store(&root).unwrap();
    initialize_store(&root).unwrap();

    let store = Store { root: root.clone() };
    assert_eq!(list_items(&store).unwrap().len(), 6);

    let conn = rusqlite::Connection::open(studio_db_path(&root)).unwrap();
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn test_store_uses_contract_db_name() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();

    assert_eq!(schemas::STUDIO_DB_NAME, "dercor8.db");
    assert!(studio_db_path(&root).is_file());
}

#[test]
fn test_mutations_are_audit_logged() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();

    let log_path = root.join(schemas::EVENTS_LOG_NAME);
    let raw = fs::read_to_string(&log_path).unwrap();
    let mut ops = Vec::new();
    for line in raw.lines() {
        let ev: Value = serde_json::from_str(line).expect("event lines are JSON");
        assert_eq!(ev["status"], "success");
        assert!(ev["event_id"].as_str().is_some());
        ops.push(ev["op"].as_str().unwrap().to_string());
    }
    assert!(ops.iter().any(|op| op == "catalog.init"));
    assert!(ops.iter().any(|op| op == "profile.init"));
    assert!(ops.iter().any(|op| op == "projects.init"));
}

#[test]
fn test_session_resolves_default_user() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    let store = Store { root };

    let session = Session::resolve(&store, None).unwrap();
    assert_eq!(session.user.username, "Usuario");

    let explicit = Session::resolve(&store, Some("Usuario")).unwrap();
    assert_eq!(explicit.user.id, session.user.id);

    assert!(Session::resolve(&store, Some("Nadie")).is_err());
}
