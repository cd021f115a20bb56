//! Settings persistence under the user's configuration directory.
//!
//! Widgets and applications store their state as small JSON files in
//! `<config dir>/<app>/<file>`. Loading degrades gracefully: a missing or
//! corrupt file behaves like no stored settings at all, and write failures
//! are logged rather than surfaced. GUI state must never take the
//! application down.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Path of a named settings file for an application.
///
/// Returns `None` on platforms without a known configuration directory.
pub fn config_path(app: &str, file: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app).join(file))
}

/// Load settings for an application, or `None` if there are none (yet).
pub fn load<T: DeserializeOwned>(app: &str, file: &str) -> Option<T> {
    load_from(&config_path(app, file)?)
}

/// Save settings for an application, creating the directory as needed.
pub fn save<T: Serialize>(app: &str, file: &str, value: &T) {
    let path = match config_path(app, file) {
        Some(path) => path,
        None => return,
    };
    save_to(&path, value);
}

/// Load a JSON value from an explicit path.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Ignoring corrupt settings file {}: {}", path.display(), err);
            None
        }
    }
}

/// Save a JSON value to an explicit path, creating parent directories.
pub fn save_to<T: Serialize>(path: &Path, value: &T) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if let Err(err) = std::fs::write(path, json) {
                log::warn!("Failed to write settings file {}: {}", path.display(), err);
            }
        }
        Err(err) => {
            log::warn!("Failed to serialise settings for {}: {}", path.display(), err);
        }
    }
}
