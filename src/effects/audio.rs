//! Effects domain: sound cues and background music.

use bevy::audio::Volume;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::effects::{AudioCue, EffectRequest};
use crate::settings::Settings;

const MUSIC_PATH: &str = "audio/music.ogg";

impl AudioCue {
    pub fn asset_path(self) -> &'static str {
        match self {
            AudioCue::Jump => "audio/jump.ogg",
            AudioCue::Footstep => "audio/walk.ogg",
            AudioCue::Key => "audio/key.ogg",
        }
    }
}

/// Loaded sound handles. Missing files are reported by the asset server
/// and simply play nothing.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    pub cues: HashMap<AudioCue, Handle<AudioSource>>,
    pub music: Handle<AudioSource>,
}

/// Marker for the looping background track.
#[derive(Component, Debug)]
pub struct BackgroundMusic;

pub(crate) fn load_sounds(mut library: ResMut<SoundLibrary>, asset_server: Res<AssetServer>) {
    for cue in [AudioCue::Jump, AudioCue::Footstep, AudioCue::Key] {
        library.cues.insert(cue, asset_server.load(cue.asset_path()));
    }
    library.music = asset_server.load(MUSIC_PATH);
}

pub(crate) fn play_audio_cues(
    mut commands: Commands,
    mut requests: MessageReader<EffectRequest>,
    library: Res<SoundLibrary>,
    settings: Res<Settings>,
) {
    for request in requests.read() {
        let EffectRequest::Cue { cue, volume } = *request else {
            continue;
        };
        let gain = settings.effect_gain(volume);
        if gain <= 0.0 {
            continue;
        }
        let Some(handle) = library.cues.get(&cue) else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(gain)),
        ));
    }
}

pub(crate) fn start_music(
    mut commands: Commands,
    library: Res<SoundLibrary>,
    settings: Res<Settings>,
    existing: Query<Entity, With<BackgroundMusic>>,
) {
    if !existing.is_empty() || settings.music_gain() <= 0.0 {
        return;
    }
    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(library.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(settings.music_gain())),
    ));
    debug!("Background music started");
}

pub(crate) fn stop_music(mut commands: Commands, query: Query<Entity, With<BackgroundMusic>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
