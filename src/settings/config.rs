//! Settings domain: player settings persisted as JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "game_config.json";

/// Error type for settings persistence failures.
#[derive(Debug)]
pub struct SettingsError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Settings file {}: {}", self.path, self.message)
    }
}

impl std::error::Error for SettingsError {}

/// Audio and theme preferences. Missing fields take their defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub music_enabled: bool,
    pub sound_effects_enabled: bool,
    pub music_volume: f32,
    pub sound_effects_volume: f32,
    pub dark_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sound_effects_enabled: true,
            music_volume: 0.3,
            sound_effects_volume: 0.5,
            dark_theme: false,
        }
    }
}

/// A partial settings change; `None` fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsChange {
    pub music_enabled: Option<bool>,
    pub sound_effects_enabled: Option<bool>,
    pub music_volume: Option<f32>,
    pub sound_effects_volume: Option<f32>,
    pub dark_theme: Option<bool>,
}

/// Where the settings live on disk.
#[derive(Resource, Debug, Clone)]
pub struct SettingsPath(pub PathBuf);

impl Default for SettingsPath {
    fn default() -> Self {
        Self(PathBuf::from(SETTINGS_FILE))
    }
}

impl Settings {
    pub fn parse(path: &Path, contents: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings =
            serde_json::from_str(contents).map_err(|e| SettingsError {
                path: path.display().to_string(),
                message: format!("Parse error: {}", e),
            })?;
        settings.clamp_volumes();
        Ok(settings)
    }

    /// Read settings from `path`. A missing file yields the defaults; an
    /// unreadable or corrupt one is overwritten with them.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        let loaded = fs::read_to_string(path)
            .map_err(|e| SettingsError {
                path: path.display().to_string(),
                message: format!("IO error: {}", e),
            })
            .and_then(|contents| Self::parse(path, &contents));

        match loaded {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}, restoring defaults", e);
                let settings = Self::default();
                if let Err(e) = settings.save(path) {
                    error!("{}", e);
                }
                settings
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| SettingsError {
            path: path.display().to_string(),
            message: format!("Serialize error: {}", e),
        })?;
        fs::write(path, contents).map_err(|e| SettingsError {
            path: path.display().to_string(),
            message: format!("IO error: {}", e),
        })
    }

    /// Apply `change` with volumes clamped to [0, 1]. Does not persist.
    pub fn apply(&mut self, change: SettingsChange) {
        if let Some(enabled) = change.music_enabled {
            self.music_enabled = enabled;
        }
        if let Some(enabled) = change.sound_effects_enabled {
            self.sound_effects_enabled = enabled;
        }
        if let Some(volume) = change.music_volume {
            self.music_volume = volume;
        }
        if let Some(volume) = change.sound_effects_volume {
            self.sound_effects_volume = volume;
        }
        if let Some(dark) = change.dark_theme {
            self.dark_theme = dark;
        }
        self.clamp_volumes();
    }

    /// Apply `change` and write the result to `path`.
    pub fn update(&mut self, change: SettingsChange, path: &Path) -> Result<(), SettingsError> {
        self.apply(change);
        self.save(path)
    }

    /// Effective music volume, zero when music is off.
    pub fn music_gain(&self) -> f32 {
        if self.music_enabled {
            self.music_volume
        } else {
            0.0
        }
    }

    /// Effective volume for a cue played at `volume`, zero when effects are off.
    pub fn effect_gain(&self, volume: f32) -> f32 {
        if self.sound_effects_enabled {
            volume * self.sound_effects_volume
        } else {
            0.0
        }
    }

    fn clamp_volumes(&mut self) {
        // NaN from a hand-edited file falls back to silence
        self.music_volume = clamp_unit(self.music_volume);
        self.sound_effects_volume = clamp_unit(self.sound_effects_volume);
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
