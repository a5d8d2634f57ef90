//! Timestamp helpers for the studio store's wire format.

use chrono::Local;

/// Returns the current local time in the store's column format,
/// e.g. `2026-08-07 14:03:21`. Lexicographic order matches chronological
/// order at second granularity, which `ORDER BY fecha DESC` relies on.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Short stamp used in default AR scene names, e.g. `07/08 14:03`.
pub fn scene_stamp() -> String {
    Local::now().format("%d/%m %H:%M").to_string()
}

/// The date prefix of a stored stamp (listings show dates only).
pub fn date_part(stamp: &str) -> &str {
    if stamp.len() >= 10 { &stamp[..10] } else { stamp }
}
