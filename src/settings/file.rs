//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::SettingsError;

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

/// `$HOME/.config/passcraft/settings.toml`, or relative to the working directory when
/// `HOME` is unset.
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home)
        .join(".config")
        .join("passcraft")
        .join("settings.toml")
}
