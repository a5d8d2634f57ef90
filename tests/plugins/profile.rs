use dercor::core::db::studio_db_path;
use dercor::core::store::Store;
use dercor::initialize_store;
use dercor::plugins::profile::{first_user, get_user, rename_user, DEFAULT_USERNAME};
use tempfile::tempdir;

fn fresh_store() -> (tempfile::TempDir, Store) {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    (tmp, Store { root })
}

#[test]
fn test_default_user_is_seeded_once() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    initialize_store(&root).unwrap();

    let store = Store { root };
    let user = first_user(&store).unwrap().expect("seeded user");
    assert_eq!(user.username, DEFAULT_USERNAME);
    assert_eq!(user.registered_at.len(), 19);

    let conn = rusqlite::Connection::open(studio_db_path(&store.root)).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_rename_moves_the_row() {
    let (_tmp, store) = fresh_store();

    assert!(rename_user(&store, "Usuario", "Ana").unwrap());
    let ana = get_user(&store, "Ana").unwrap().expect("renamed user");
    assert_eq!(ana.username, "Ana");
    assert!(get_user(&store, "Usuario").unwrap().is_none());
}

#[test]
fn test_rename_missing_user_is_noop() {
    let (_tmp, store) = fresh_store();
    assert!(!rename_user(&store, "Nadie", "Alguien").unwrap());
    assert!(get_user(&store, "Alguien").unwrap().is_none());
}

#[test]
fn test_rename_to_same_name_is_noop() {
    let (_tmp, store) = fresh_store();
    assert!(!rename_user(&store, "Usuario", "Usuario").unwrap());
    assert!(get_user(&store, "Usuario").unwrap().is_some());
}

#[test]
fn test_rename_collision_is_noop() {
    let (_tmp, store) = fresh_store();

    let conn = rusqlite::Connection::open(studio_db_path(&store.root)).unwrap();
    conn.execute(
        "INSERT INTO usuarios (username, fecha_registro) VALUES ('Ana', '2024-01-01 00:00:00')",
        [],
    )
    .unwrap();
    drop(conn);

    assert!(!rename_user(&store, "Usuario", "Ana").unwrap());
    // Both rows survive untouched.
    assert!(get_user(&store, "Usuario").unwrap().is_some());
    assert!(get_user(&store, "Ana").unwrap().is_some());
}

#[test]
fn test_first_user_is_lowest_id() {
    let (_tmp, store) = fresh_store();

    let conn = rusqlite::Connection::open(studio_db_path(&store.root)).unwrap();
    conn.execute(
        "INSERT INTO usuarios (username, fecha_registro) VALUES ('Zoe', '2024-01-01 00:00:00')",
        [],
    )
    .unwrap();
    drop(conn);

    let user = first_user(&store).unwrap().unwrap();
    assert_eq!(user.username, DEFAULT_USERNAME);
}
