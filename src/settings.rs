//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions:
//! the last chosen languages and the translation log location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Last selected source language name ("Auto-detect" included)
    #[serde(default)]
    pub source_language: Option<String>,
    /// Last selected target language name
    #[serde(default)]
    pub target_language: Option<String>,
    /// Where the translation log is written; `None` uses the default
    /// `translations.csv` in the current directory
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            source_language: None,
            target_language: None,
            log_path: None,
        }
    }
}

impl UserSettings {
    /// Get the config directory path for LingoPad
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("LingoPad"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("LingoPad"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("lingopad"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }
}
