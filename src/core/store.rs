//! Store and session context for the studio's state.
//!
//! All persistence operations take an explicit [`Store`] instead of
//! reaching for process-global state; the CLI resolves a [`Session`]
//! (store + active user) once per invocation and passes it down.

use crate::core::error;
use crate::plugins::profile::{self, User};
use std::path::PathBuf;

/// Store handle representing the studio data workspace.
///
/// A Store is the directory holding the SQLite file, the broker audit log,
/// and the AR scene draft. Lifecycle is owned by the top-level process.
#[derive(Debug, Clone)]
pub struct Store {
    /// Absolute or cwd-relative path to the store root directory.
    pub root: PathBuf,
}

/// Per-invocation context: the store plus the active user.
#[derive(Debug, Clone)]
pub struct Session {
    pub store: Store,
    pub user: User,
}

impl Session {
    /// Resolve the active user: an explicit `--user` name when given,
    /// otherwise the first user row (the seeded default on a fresh store).
    pub fn resolve(store: &Store, username: Option<&str>) -> Result<Self, error::DercorError> {
        let user = match username {
            Some(name) => profile::get_user(store, name)?
                .ok_or_else(|| error::DercorError::NotFound(format!("user '{}'", name)))?,
            None => profile::first_user(store)?
                .ok_or_else(|| error::DercorError::NotFound("no users in store".to_string()))?,
        };
        Ok(Self {
            store: store.clone(),
            user,
        })
    }
}
