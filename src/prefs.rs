//! On-disk user preferences (currently just the active language).
//!
//! A bad or missing preferences file must never prevent startup, so `load`
//! degrades to defaults and only `save` surfaces errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

const PREFS_FILE: &str = "preferences.json";

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted user choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
}

/// Platform-specific data directory for the preferences file.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ATELIER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/atelier");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("atelier");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/atelier");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("atelier");
        }
    }
    PathBuf::from(".").join("atelier")
}

/// Load preferences from the default data directory.
pub fn load() -> Preferences {
    load_from(&default_data_dir())
}

/// Load preferences from `dir`, falling back to defaults if the file is
/// missing or unreadable.
pub fn load_from(dir: &Path) -> Preferences {
    let path = dir.join(PREFS_FILE);
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!("ignoring malformed preferences at {}: {err}", path.display());
                Preferences::default()
            }
        },
        Err(_) => Preferences::default(),
    }
}

/// Save preferences to the default data directory.
pub fn save(prefs: &Preferences) -> Result<(), PrefsError> {
    save_in(&default_data_dir(), prefs)
}

/// Save preferences into `dir`, creating it if needed.
pub fn save_in(dir: &Path, prefs: &Preferences) -> Result<(), PrefsError> {
    fs::create_dir_all(dir)?;
    let contents = serde_json::to_string_pretty(prefs)?;
    fs::write(dir.join(PREFS_FILE), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            language: Language::Uk,
        };
        save_in(dir.path(), &prefs).unwrap();
        assert_eq!(load_from(dir.path()), prefs);
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(dir.path()), Preferences::default());
    }

    #[test]
    fn malformed_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILE), "{not json").unwrap();
        assert_eq!(load_from(dir.path()), Preferences::default());
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Preferences::default().language, Language::En);
    }
}
