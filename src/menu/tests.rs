//! Menu domain: action mapping and theme tests.

use super::{MenuAction, MenuTheme, step_volume};
use crate::settings::{Settings, SettingsChange};

#[test]
fn test_volume_steps_snap_to_tenths() {
    assert_eq!(step_volume(0.3, 1), 0.4);
    assert_eq!(step_volume(0.3, -1), 0.2);
    assert_eq!(step_volume(0.0, -1), -0.1);
}

#[test]
fn test_volume_step_clamped_by_settings() {
    let mut settings = Settings {
        music_volume: 1.0,
        ..Default::default()
    };

    let change = MenuAction::MusicVolume(1)
        .settings_change(&settings)
        .expect("volume action changes settings");
    settings.apply(change);

    assert_eq!(settings.music_volume, 1.0);
}

#[test]
fn test_toggles_flip_current_value() {
    let settings = Settings::default();

    assert_eq!(
        MenuAction::ToggleTheme.settings_change(&settings),
        Some(SettingsChange {
            dark_theme: Some(true),
            ..Default::default()
        })
    );
    assert_eq!(
        MenuAction::ToggleMusic.settings_change(&settings),
        Some(SettingsChange {
            music_enabled: Some(false),
            ..Default::default()
        })
    );
}

#[test]
fn test_navigation_actions_leave_settings_alone() {
    let settings = Settings::default();
    for action in [
        MenuAction::Play,
        MenuAction::OpenSettings,
        MenuAction::Quit,
        MenuAction::Back,
    ] {
        assert_eq!(action.settings_change(&settings), None);
    }
}

#[test]
fn test_volume_button_labels() {
    assert_eq!(MenuAction::EffectsVolume(-1).label(), "-");
    assert_eq!(MenuAction::EffectsVolume(1).label(), "+");
}

#[test]
fn test_theme_follows_setting() {
    assert_eq!(MenuTheme::for_dark_theme(true), MenuTheme::DARK);
    assert_eq!(MenuTheme::for_dark_theme(false), MenuTheme::LIGHT);
    assert_ne!(MenuTheme::DARK.background, MenuTheme::LIGHT.background);
}
