// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file.
//!
//! Unknown keys in the file are ignored and omitted keys fall back to
//! their defaults, so hand-edited or stale configs degrade gracefully
//! instead of failing.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedZoomer";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub expansion_size: Option<f32>,
    #[serde(default)]
    pub speed_multiplier: Option<f32>,
    #[serde(default)]
    pub lens_size: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            expansion_size: Some(DEFAULT_EXPANSION_SIZE),
            speed_multiplier: Some(DEFAULT_SPEED_MULTIPLIER),
            lens_size: Some(DEFAULT_LENS_SIZE),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            language: Some("fr".to_string()),
            expansion_size: Some(45.0),
            speed_multiplier: Some(2.0),
            lens_size: Some(80.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.expansion_size, config.expansion_size);
        assert_eq!(loaded.speed_multiplier, config.speed_multiplier);
        assert_eq!(loaded.lens_size, config.lens_size);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.expansion_size, Some(DEFAULT_EXPANSION_SIZE));
        assert_eq!(loaded.speed_multiplier, Some(DEFAULT_SPEED_MULTIPLIER));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "speed_multiplier = 3.0\nsome_future_option = \"yes\"\n",
        )
        .expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.speed_multiplier, Some(3.0));
    }

    #[test]
    fn omitted_keys_fall_back_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.language, Some("en-US".to_string()));
        assert_eq!(loaded.expansion_size, None);
        assert_eq!(loaded.lens_size, None);
    }
}
