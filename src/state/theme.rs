//! Color theme and its persisted preference.
//!
//! The preference lives under the `admin-theme` key of a small key-value
//! store. Reading or writing it never fails the caller: problems are logged
//! and the light theme is used.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Preference key holding `"dark"` or `"light"`.
pub const ADMIN_THEME_KEY: &str = "admin-theme";

/// Color theme of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference value: `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// `"dark"` selects dark; anything else, including nothing, is light.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

// ===== Preference store =====

/// Failure reading or writing stored preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The preferences file could not be read or written.
    #[error("Failed to access preferences at {path}: {source}")]
    Io {
        /// Preferences file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The preferences file exists but is not a JSON object of strings.
    #[error("Preferences at {path} are not valid JSON: {source}")]
    Corrupt {
        /// Preferences file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage surviving restarts.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    /// Store `value` under `key`, keeping every other key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<state_dir>/admintable/preferences.json`, falling back to
    /// the local data directory on platforms without a state directory.
    pub fn open_default() -> Option<Self> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| Self::new(dir.join("admintable").join("preferences.json")))
    }

    /// Location of the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced; an unreadable one must not be clobbered
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Corrupt { path, source }) => {
                warn!(path = %path.display(), error = %source, "Replacing corrupt preferences");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let io_error = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(&values).map_err(|source| {
            PreferenceError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(io_error)
    }
}

/// In-process store, used when no preference directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme saved in `store`, light if unset or unreadable.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(ADMIN_THEME_KEY) {
        Ok(value) => Theme::from_preference(value.as_deref()),
        Err(e) => {
            warn!(error = %e, "Could not read theme preference, using light");
            Theme::Light
        }
    }
}

/// Persist `theme`. Failures are logged and otherwise ignored.
pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) {
    match store.set(ADMIN_THEME_KEY, theme.as_str()) {
        Ok(()) => debug!(theme = theme.as_str(), "Saved theme preference"),
        Err(e) => warn!(error = %e, "Could not save theme preference"),
    }
}
