use dercor::core::db::studio_db_path;
use dercor::core::store::Store;
use dercor::initialize_store;
use dercor::plugins::profile::first_user;
use dercor::plugins::projects::{
    delete_all_for_user, delete_project, get_project, list_projects, save_ar_scene, save_proposal,
    ProjectKind,
};
use serde_json::Value;
use tempfile::tempdir;

fn fresh_store() -> (tempfile::TempDir, Store, i64) {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    let store = Store { root };
    let user_id = first_user(&store).unwrap().unwrap().id;
    (tmp, store, user_id)
}

#[test]
fn test_save_proposal_derives_name() {
    let (_tmp, store, user_id) = fresh_store();

    save_proposal(&store, user_id, "Moderno", "Propuesta para estilo Moderno").unwrap();

    let items = list_projects(&store, user_id, Some(ProjectKind::Propuesta)).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Propuesta Moderno");
    assert_eq!(items[0].kind, "propuesta");
    assert!(items[0].payload.contains("Moderno"));
}

#[test]
fn test_ar_payload_round_trip() {
    let (_tmp, store, user_id) = fresh_store();

    let payload = r#"[{"type":"sofa","position":[10,20],"rotation":0,"scale":1}]"#;
    save_ar_scene(&store, user_id, "Escena AR 01/01 10:00", payload).unwrap();

    let items = list_projects(&store, user_id, Some(ProjectKind::Ar)).unwrap();
    assert_eq!(items.len(), 1);

    let stored: Value = serde_json::from_str(&items[0].payload).unwrap();
    let expected: Value = serde_json::from_str(payload).unwrap();
    assert_eq!(stored, expected);
}

#[test]
fn test_save_for_missing_user_is_rejected() {
    let (_tmp, store, _user_id) = fresh_store();
    assert!(save_proposal(&store, 999, "Moderno", "texto").is_err());
    assert!(save_ar_scene(&store, 999, "Escena", "[]").is_err());
}

#[test]
fn test_delete_project() {
    let (_tmp, store, user_id) = fresh_store();

    let id = save_proposal(&store, user_id, "Moderno", "texto").unwrap();

    // Nonexistent id: false, table unchanged.
    assert!(!delete_project(&store, id + 100).unwrap());
    assert_eq!(list_projects(&store, user_id, None).unwrap().len(), 1);

    // Existing id: true, exactly that row removed.
    assert!(delete_project(&store, id).unwrap());
    assert!(list_projects(&store, user_id, None).unwrap().is_empty());
    assert!(get_project(&store, id).unwrap().is_none());
}

#[test]
fn test_listing_is_most_recent_first() {
    let (_tmp, store, user_id) = fresh_store();

    let a = save_proposal(&store, user_id, "Moderno", "a").unwrap();
    let b = save_proposal(&store, user_id, "Clásico", "b").unwrap();
    let c = save_proposal(&store, user_id, "Industrial", "c").unwrap();

    // Spread the stamps so ordering is decided by fecha alone: the first
    // row saved becomes the most recent.
    let conn = rusqlite::Connection::open(studio_db_path(&store.root)).unwrap();
    for (id, stamp) in [
        (a, "2024-03-03 10:00:00"),
        (b, "2024-03-01 10:00:00"),
        (c, "2024-03-02 10:00:00"),
    ] {
        conn.execute(
            "UPDATE proyectos SET fecha = ?1 WHERE id = ?2",
            rusqlite::params![stamp, id],
        )
        .unwrap();
    }
    drop(conn);

    let items = list_projects(&store, user_id, None).unwrap();
    let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a, c, b]);
}

#[test]
fn test_same_second_saves_list_newest_first() {
    let (_tmp, store, user_id) = fresh_store();

    let a = save_proposal(&store, user_id, "Moderno", "a").unwrap();
    let b = save_proposal(&store, user_id, "Clásico", "b").unwrap();
    let c = save_proposal(&store, user_id, "Industrial", "c").unwrap();

    let items = list_projects(&store, user_id, None).unwrap();
    let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c, b, a]);
}

#[test]
fn test_kind_filter() {
    let (_tmp, store, user_id) = fresh_store();

    save_proposal(&store, user_id, "Moderno", "texto").unwrap();
    save_ar_scene(&store, user_id, "Escena", "[]").unwrap();

    let proposals = list_projects(&store, user_id, Some(ProjectKind::Propuesta)).unwrap();
    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0].kind, "propuesta");

    let scenes = list_projects(&store, user_id, Some(ProjectKind::Ar)).unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].kind, "ar");

    assert_eq!(list_projects(&store, user_id, None).unwrap().len(), 2);
}

#[test]
fn test_bulk_delete_only_touches_one_user() {
    let (_tmp, store, user_id) = fresh_store();

    let conn = rusqlite::Connection::open(studio_db_path(&store.root)).unwrap();
    conn.execute(
        "INSERT INTO usuarios (username, fecha_registro) VALUES ('Ana', '2024-01-01 00:00:00')",
        [],
    )
    .unwrap();
    let other_id: i64 = conn
        .query_row(
            "SELECT id FROM usuarios WHERE username = 'Ana'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    drop(conn);

    save_proposal(&store, user_id, "Moderno", "a").unwrap();
    save_proposal(&store, user_id, "Clásico", "b").unwrap();
    save_ar_scene(&store, other_id, "Escena", "[]").unwrap();

    assert_eq!(delete_all_for_user(&store, user_id).unwrap(), 2);
    assert!(list_projects(&store, user_id, None).unwrap().is_empty());
    assert_eq!(list_projects(&store, other_id, None).unwrap().len(), 1);

    // Nothing left to delete.
    assert_eq!(delete_all_for_user(&store, user_id).unwrap(), 0);
}
