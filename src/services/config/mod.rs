pub mod models;

pub use models::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::types::errors::{BrowserError, BrowserResult};

/// Browser settings backed by a JSON file.
pub struct ConfigService {
    path: PathBuf,
    settings: Mutex<BrowserSettings>,
}

impl ConfigService {
    /// Load settings from `path`. A missing or unparsable file yields defaults.
    pub fn new(path: PathBuf) -> Self {
        let settings = Self::load_from_file(&path);
        Self {
            path,
            settings: Mutex::new(settings),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> BrowserSettings {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return BrowserSettings::default();
            }
            Err(e) => {
                log::warn!("Failed to read config {}: {e}", path.display());
                return BrowserSettings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                BrowserSettings::default()
            }
        }
    }

    pub fn get_settings(&self) -> BrowserSettings {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn save_settings(&self, new_settings: BrowserSettings) -> BrowserResult<()> {
        let json = serde_json::to_string_pretty(&new_settings)?;
        atomic_write(&self.path, &json)?;

        *self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_settings;
        Ok(())
    }
}

/// Write a file atomically: write to `.tmp`, then rename to final path.
pub fn atomic_write(path: &Path, content: &str) -> BrowserResult<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| {
            BrowserError::InvalidArgument(format!("Invalid file path: {}", path.display()))
        })?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
