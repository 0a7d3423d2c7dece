//! Settings domain: persistence and clamping tests.

use std::fs;
use std::path::PathBuf;

use super::{Settings, SettingsChange};

fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "escape-castle-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(settings.music_enabled);
    assert!(settings.sound_effects_enabled);
    assert_eq!(settings.music_volume, 0.3);
    assert_eq!(settings.sound_effects_volume, 0.5);
    assert!(!settings.dark_theme);
}

#[test]
fn test_missing_file_uses_defaults_without_writing() {
    let path = scratch_path("missing");

    assert_eq!(Settings::load_or_default(&path), Settings::default());
    assert!(!path.exists());
}

#[test]
fn test_partial_file_fills_missing_fields() {
    let path = scratch_path("partial");
    let settings = Settings::parse(&path, r#"{ "dark_theme": true, "music_volume": 0.8 }"#)
        .expect("partial settings should parse");

    assert!(settings.dark_theme);
    assert_eq!(settings.music_volume, 0.8);
    assert_eq!(settings.sound_effects_volume, 0.5);
}

#[test]
fn test_out_of_range_volumes_clamped_on_load() {
    let path = scratch_path("range");
    let settings = Settings::parse(
        &path,
        r#"{ "music_volume": 3.5, "sound_effects_volume": -1.0 }"#,
    )
    .expect("settings should parse");

    assert_eq!(settings.music_volume, 1.0);
    assert_eq!(settings.sound_effects_volume, 0.0);
}

#[test]
fn test_corrupt_file_rewritten_with_defaults() {
    let path = scratch_path("corrupt");
    fs::write(&path, "{ not json").expect("write scratch file");

    let settings = Settings::load_or_default(&path);
    assert_eq!(settings, Settings::default());

    let contents = fs::read_to_string(&path).expect("settings rewritten");
    let reloaded = Settings::parse(&path, &contents).expect("rewritten file parses");
    assert_eq!(reloaded, Settings::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_update_clamps_and_persists() {
    let path = scratch_path("update");
    let mut settings = Settings::default();

    settings
        .update(
            SettingsChange {
                music_volume: Some(1.4),
                sound_effects_enabled: Some(false),
                ..Default::default()
            },
            &path,
        )
        .expect("settings saved");

    assert_eq!(settings.music_volume, 1.0);
    assert!(!settings.sound_effects_enabled);
    assert_eq!(settings.sound_effects_volume, 0.5);
    assert_eq!(Settings::load_or_default(&path), settings);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_gains_respect_toggles() {
    let mut settings = Settings::default();
    assert_eq!(settings.music_gain(), 0.3);
    assert_eq!(settings.effect_gain(0.2), 0.1);

    settings.apply(SettingsChange {
        music_enabled: Some(false),
        sound_effects_enabled: Some(false),
        ..Default::default()
    });

    assert_eq!(settings.music_gain(), 0.0);
    assert_eq!(settings.effect_gain(0.5), 0.0);
}
