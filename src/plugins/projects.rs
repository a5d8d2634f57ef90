use crate::core::broker::DbBroker;
use crate::core::db;
use crate::core::error;
use crate::core::schemas;
use crate::core::store::Store;
use crate::core::time;
use clap::ValueEnum;
use rusqlite::{OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The two saved-project kinds. The wire values ("propuesta", "ar") are
/// part of the on-disk contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
pub enum ProjectKind {
    Propuesta,
    Ar,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Propuesta => "propuesta",
            ProjectKind::Ar => "ar",
        }
    }
}

/// A saved project row. `kind` stays a raw string when read back so rows
/// written by other frontends never fail to load.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: String,
    pub payload: String,
    pub created_at: String,
}

pub fn initialize_projects_db(root: &Path) -> Result<(), error::DercorError> {
    let broker = DbBroker::new(root);
    let db_path = db::studio_db_path(root);

    broker.with_conn(&db_path, "dercor", "projects.init", |conn| {
        conn.execute(schemas::STUDIO_DB_SCHEMA_PROYECTOS, [])?;
        conn.execute(schemas::STUDIO_DB_SCHEMA_INDEX_PROYECTOS_USER, [])?;
        Ok(())
    })
}

fn ensure_user_exists(
    conn: &rusqlite::Connection,
    user_id: i64,
) -> Result<(), error::DercorError> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM usuarios WHERE id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(error::DercorError::RusqliteError)?;
    if found.is_none() {
        return Err(error::DercorError::NotFound(format!("user id {}", user_id)));
    }
    Ok(())
}

/// Save a style proposal. The project name is derived from the style label.
pub fn save_proposal(
    store: &Store,
    user_id: i64,
    style: &str,
    content: &str,
) -> Result<i64, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.save_proposal", |conn| {
        ensure_user_exists(conn, user_id)?;
        conn.execute(
            "INSERT INTO proyectos (user_id, nombre, tipo, datos, fecha)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                format!("Propuesta {}", style),
                ProjectKind::Propuesta.as_str(),
                content,
                time::now_stamp()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Save a serialized AR scene under the given display name.
pub fn save_ar_scene(
    store: &Store,
    user_id: i64,
    name: &str,
    payload: &str,
) -> Result<i64, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.save_ar", |conn| {
        ensure_user_exists(conn, user_id)?;
        conn.execute(
            "INSERT INTO proyectos (user_id, nombre, tipo, datos, fecha)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user_id,
                name,
                ProjectKind::Ar.as_str(),
                payload,
                time::now_stamp()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// The user's projects, most recent first. The id tiebreak keeps
/// same-second saves in stable newest-first order.
pub fn list_projects(
    store: &Store,
    user_id: i64,
    kind: Option<ProjectKind>,
) -> Result<Vec<Project>, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.list", |conn| {
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<Project> {
            Ok(Project {
                id: row.get(0)?,
                user_id: row.get(1)?,
                name: row.get(2)?,
                kind: row.get(3)?,
                payload: row.get(4)?,
                created_at: row.get(5)?,
            })
        };

        let mut out = Vec::new();
        match kind {
            Some(k) => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, nombre, tipo, datos, fecha FROM proyectos
                     WHERE user_id = ?1 AND tipo = ?2
                     ORDER BY fecha DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![user_id, k.as_str()], map_row)?;
                for r in rows {
                    out.push(r?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, nombre, tipo, datos, fecha FROM proyectos
                     WHERE user_id = ?1
                     ORDER BY fecha DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![user_id], map_row)?;
                for r in rows {
                    out.push(r?);
                }
            }
        }
        Ok(out)
    })
}

/// Fetch one project by id.
pub fn get_project(store: &Store, id: i64) -> Result<Option<Project>, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.get", |conn| {
        let project = conn
            .query_row(
                "SELECT id, user_id, nombre, tipo, datos, fecha FROM proyectos WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Project {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        name: row.get(2)?,
                        kind: row.get(3)?,
                        payload: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(error::DercorError::RusqliteError)?;
        Ok(project)
    })
}

/// Delete one project. Returns whether a row was removed.
pub fn delete_project(store: &Store, id: i64) -> Result<bool, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.delete", |conn| {
        let affected = conn.execute("DELETE FROM proyectos WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    })
}

/// Delete every project of one user. Returns how many rows were removed.
pub fn delete_all_for_user(store: &Store, user_id: i64) -> Result<usize, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "projects.clear", |conn| {
        let affected = conn.execute("DELETE FROM proyectos WHERE user_id = ?1", params![user_id])?;
        Ok(affected)
    })
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "projects",
        "version": "0.1.0",
        "description": "Saved design projects (style proposals and AR scenes)",
        "commands": [
            { "name": "save_proposal", "parameters": ["user_id", "style", "content"] },
            { "name": "save_ar_scene", "parameters": ["user_id", "name", "payload"] },
            { "name": "list", "parameters": ["user_id", "kind"] },
            { "name": "get", "parameters": ["id"] },
            { "name": "delete", "parameters": ["id"] },
            { "name": "clear", "parameters": ["user_id"] }
        ],
        "storage": ["proyectos"]
    })
}
