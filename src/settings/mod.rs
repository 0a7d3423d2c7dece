//! Settings domain: persisted audio and theme preferences.

mod config;

#[cfg(test)]
mod tests;

pub use config::{SETTINGS_FILE, Settings, SettingsChange, SettingsError, SettingsPath};

use bevy::prelude::*;

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SettingsPath>()
            .init_resource::<Settings>()
            .add_systems(PreStartup, load_settings);
    }
}

fn load_settings(path: Res<SettingsPath>, mut settings: ResMut<Settings>) {
    *settings = Settings::load_or_default(&path.0);
    info!(
        "Settings: music {} ({:.1}), effects {} ({:.1}), dark theme {}",
        settings.music_enabled,
        settings.music_volume,
        settings.sound_effects_enabled,
        settings.sound_effects_volume,
        settings.dark_theme
    );
}
