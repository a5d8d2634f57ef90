use rusqlite;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DercorError {
    #[error("SQLite error: {0}")]
    RusqliteError(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
