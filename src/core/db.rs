use crate::core::error;
use crate::core::schemas;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub fn db_connect(db_path: &str) -> Result<Connection, error::DercorError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(error::DercorError::RusqliteError)?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))
        .map_err(error::DercorError::RusqliteError)?;
    conn.execute("PRAGMA foreign_keys=ON;", [])
        .map_err(error::DercorError::RusqliteError)?;
    Ok(conn)
}

/// Path of the consolidated studio database under a store root.
pub fn studio_db_path(root: &Path) -> PathBuf {
    root.join(schemas::STUDIO_DB_NAME)
}
