//! Furniture asset lookup for the AR canvas.
//!
//! The scene model only needs one question answered: does a graphic exist
//! for this furniture kind? The seam is a trait so the scene logic stays
//! independent of the filesystem (tests substitute a fixed set).

use std::path::{Path, PathBuf};

/// Placeholder graphic used when a furniture asset is missing.
pub const FALLBACK_ASSET: &str = "default.png";

/// Asset-existence check consumed by the AR add-furniture flow.
pub trait AssetSource {
    fn exists(&self, name: &str) -> bool;
}

/// Filesystem-backed assets under a root directory.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssets {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }
}

/// Resolve the graphic for a furniture asset: the asset itself when
/// present, else the placeholder, else nothing (the add is skipped).
pub fn resolve_asset(assets: &dyn AssetSource, name: &str) -> Option<String> {
    if assets.exists(name) {
        Some(name.to_string())
    } else if assets.exists(FALLBACK_ASSET) {
        Some(FALLBACK_ASSET.to_string())
    } else {
        None
    }
}
