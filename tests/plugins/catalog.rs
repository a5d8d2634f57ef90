use dercor::core::db::studio_db_path;
use dercor::core::store::Store;
use dercor::initialize_store;
use dercor::plugins::catalog::list_items;
use tempfile::tempdir;

#[test]
fn test_seeding_is_idempotent() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    initialize_store(&root).unwrap();

    let store = Store { root };
    let items = list_items(&store).unwrap();
    assert_eq!(items.len(), 6);
}

#[test]
fn test_seed_content_in_insertion_order() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();

    let store = Store { root };
    let items = list_items(&store).unwrap();

    assert_eq!(items[0].name, "Sofá Moderno");
    assert_eq!(items[0].category, "Sofá");
    assert_eq!(items[0].price, 4500.00);
    assert_eq!(items[0].stock, 10);
    assert_eq!(items[5].name, "Cama King Size");

    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_prepopulated_table_is_not_reseeded() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();

    let conn = rusqlite::Connection::open(studio_db_path(&root)).unwrap();
    conn.execute(
        "INSERT INTO productos (nombre, categoria, precio, imagen, descripcion, stock)
         VALUES ('Otomana', 'Sofá', 900.0, 'assets/otomana.png', 'Otomana compacta', 3)",
        [],
    )
    .unwrap();
    drop(conn);

    initialize_store(&root).unwrap();

    let store = Store { root };
    let items = list_items(&store).unwrap();
    assert_eq!(items.len(), 7);
}
