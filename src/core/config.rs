//! Studio configuration: where the data and assets directories live.
//!
//! Resolution order, highest first: environment (`DERCOR_DATA`,
//! `DERCOR_ASSETS`), then an optional `dercor.toml` next to the working
//! directory, then the defaults (`./data`, `./assets`). A missing config
//! file is the default configuration, not an error.

use crate::core::error;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "dercor.toml";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

impl StudioConfig {
    /// Parse `dercor.toml` under `dir` if present.
    pub fn load(dir: &Path) -> Result<Self, error::DercorError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(error::DercorError::IoError)?;
        toml::from_str(&raw)
            .map_err(|e| error::DercorError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn data_root(&self, base: &Path) -> PathBuf {
        if let Ok(dir) = env::var("DERCOR_DATA") {
            return PathBuf::from(dir);
        }
        match &self.data_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base.join(dir),
            None => base.join(DEFAULT_DATA_DIR),
        }
    }

    pub fn assets_root(&self, base: &Path) -> PathBuf {
        if let Ok(dir) = env::var("DERCOR_ASSETS") {
            return PathBuf::from(dir);
        }
        match &self.assets_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base.join(dir),
            None => base.join(DEFAULT_ASSETS_DIR),
        }
    }
}
