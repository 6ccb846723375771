//! `settings.json` on disk. Parsing of the keybinding strings it carries lives
//! in the keybinding adapter.

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::settings::Settings;

use super::dirs::{app_dir, DirKind};

const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The per-user file, or `None` when no config dir can be resolved.
    pub fn user() -> Option<Self> {
        app_dir(DirKind::Config).map(|dir| Self::at(dir.join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `Settings::default()` unless the file already exists.
    /// Returns whether a file was created.
    pub fn ensure(&self) -> std::io::Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Settings::default())
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        std::fs::write(&self.path, content)?;
        tracing::info!(path = %self.path.display(), "wrote default settings");
        Ok(true)
    }

    /// Missing files read as `None`; malformed ones are logged and read as `None`.
    pub fn load(&self) -> Option<Settings> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data)
            .map_err(|err| {
                tracing::warn!(path = %self.path.display(), error = %err, "invalid settings file");
            })
            .ok()
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    SettingsFile::user().map(|file| file.path)
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let file = SettingsFile::user().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    file.ensure()?;
    Ok(file.path)
}

pub fn load_settings() -> Option<Settings> {
    SettingsFile::user()?.load()
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    SettingsFile::at(path).load()
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
