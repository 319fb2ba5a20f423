//! Utility functions shared across the crate.

use std::path::PathBuf;

use uuid::Uuid;

/// Get the user's config directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Generate a fresh object key for a filled document.
///
/// Keys are `{prefix}{uuid}.pdf` with a v4 UUID, so concurrent requests
/// cannot collide. A missing trailing slash on the prefix is added.
pub fn output_key(prefix: &str) -> String {
    let sep = if prefix.is_empty() || prefix.ends_with('/') {
        ""
    } else {
        "/"
    };
    format!("{prefix}{sep}{}.pdf", Uuid::new_v4())
}
