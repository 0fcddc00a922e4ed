//! Settings persistence.
//!
//! The settings record is a small pretty-printed JSON object stored at a
//! fixed path. Loading never fails: anything unreadable yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::SettingsError;
use crate::types::Settings;

/// Default settings file name, resolved against the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "pomodoro_config.json";

/// Loads and saves the settings record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, substituting defaults on any failure.
    ///
    /// A missing file, an unreadable file, malformed JSON, a missing field,
    /// or a zero duration all produce `Settings::default()`.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => {
                debug!("Loaded settings from {}", self.path.display());
                settings
            }
            Ok(None) => {
                debug!(
                    "Settings file {} not found, using defaults",
                    self.path.display()
                );
                Settings::default()
            }
            Err(e) => {
                warn!(
                    "Failed to load settings from {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Loads settings, reporting why a record could not be used.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// holds an invalid record.
    pub fn try_load(&self) -> Result<Option<Settings>, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SettingsError::persistence(&self.path, e)),
        };

        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(Some(settings))
    }

    /// Saves settings, replacing the previous record.
    ///
    /// The record is written to a sibling temporary file first and then
    /// renamed over the target, so readers see either the old or the new
    /// record in full.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::PersistenceFailure` if the file cannot be
    /// written.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::persistence(parent, e))?;
            }
        }

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json).map_err(|e| SettingsError::persistence(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SettingsError::persistence(&self.path, e));
        }

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}
