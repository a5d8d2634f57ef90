//! Subsystem registration — centralizes all DB initialization functions.
//!
//! Adding a new subsystem: append one entry to `SUBSYSTEMS`.

use crate::core::error;
use crate::plugins::{catalog, profile, projects};
use std::path::Path;

pub(crate) struct SubsystemInit {
    /// Subsystem identifier (used for diagnostics and init summaries).
    pub name: &'static str,
    pub initialize_db: fn(&Path) -> Result<(), error::DercorError>,
}

/// All subsystems that require database initialization. Order matters:
/// profiles must exist before projects reference them on a first run.
pub(crate) const SUBSYSTEMS: &[SubsystemInit] = &[
    SubsystemInit { name: "catalog", initialize_db: catalog::initialize_catalog_db },
    SubsystemInit { name: "profile", initialize_db: profile::initialize_users_db },
    SubsystemInit { name: "projects", initialize_db: projects::initialize_projects_db },
];

/// Initialize all subsystem tables sequentially. Idempotent: existing
/// tables are left alone and non-empty tables are never re-seeded.
pub(crate) fn initialize_all_dbs(data_root: &Path) -> Result<(), error::DercorError> {
    for sub in SUBSYSTEMS {
        (sub.initialize_db)(data_root)?;
    }
    Ok(())
}
