//! Menu domain: button actions and the settings changes they make.

use crate::settings::{Settings, SettingsChange};

pub const VOLUME_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPage {
    #[default]
    Main,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    OpenSettings,
    ToggleTheme,
    Quit,
    ToggleMusic,
    ToggleEffects,
    /// Step music volume up (+1) or down (-1).
    MusicVolume(i8),
    EffectsVolume(i8),
    Back,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Play => "Play",
            MenuAction::OpenSettings => "Settings",
            MenuAction::ToggleTheme => "Theme",
            MenuAction::Quit => "Quit",
            MenuAction::ToggleMusic => "Music on/off",
            MenuAction::ToggleEffects => "Sound effects on/off",
            MenuAction::MusicVolume(step) | MenuAction::EffectsVolume(step) if step < 0 => "-",
            MenuAction::MusicVolume(_) | MenuAction::EffectsVolume(_) => "+",
            MenuAction::Back => "Back",
        }
    }

    /// The settings change this action makes, if any.
    pub fn settings_change(self, settings: &Settings) -> Option<SettingsChange> {
        match self {
            MenuAction::ToggleTheme => Some(SettingsChange {
                dark_theme: Some(!settings.dark_theme),
                ..Default::default()
            }),
            MenuAction::ToggleMusic => Some(SettingsChange {
                music_enabled: Some(!settings.music_enabled),
                ..Default::default()
            }),
            MenuAction::ToggleEffects => Some(SettingsChange {
                sound_effects_enabled: Some(!settings.sound_effects_enabled),
                ..Default::default()
            }),
            MenuAction::MusicVolume(step) => Some(SettingsChange {
                music_volume: Some(step_volume(settings.music_volume, step)),
                ..Default::default()
            }),
            MenuAction::EffectsVolume(step) => Some(SettingsChange {
                sound_effects_volume: Some(step_volume(settings.sound_effects_volume, step)),
                ..Default::default()
            }),
            MenuAction::Play | MenuAction::OpenSettings | MenuAction::Quit | MenuAction::Back => {
                None
            }
        }
    }
}

/// Move `volume` by one step and snap to tenths. Clamping happens in `Settings`.
pub fn step_volume(volume: f32, step: i8) -> f32 {
    ((volume + step as f32 * VOLUME_STEP) * 10.0).round() / 10.0
}
