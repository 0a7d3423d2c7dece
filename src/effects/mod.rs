//! Effects domain: cosmetic feedback driven by movement signals.
//!
//! The trigger turns each tick's [`FrameReport`](crate::movement::FrameReport)
//! into [`EffectRequest`] messages; particle, shake and audio sinks consume
//! them. Key pickups and doors are resolved here too, through the level session.

mod audio;
mod particles;
mod systems;
mod trigger;

#[cfg(test)]
mod tests;

pub use audio::{BackgroundMusic, SoundLibrary};
pub use particles::{BurstKind, Particle, ParticlePool, ScreenShake, TRAIL_CHANCE};
pub use trigger::{
    AudioCue, EffectRequest, EffectsTrigger, FOOTSTEP_CUE_VOLUME, JUMP_CUE_VOLUME,
    KEY_CUE_VOLUME, STEP_INTERVAL,
};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::effects::audio::{load_sounds, play_audio_cues, start_music, stop_music};
use crate::effects::systems::{
    apply_visual_requests, draw_particles, process_pickups, reset_effects, trigger_effects,
    update_particles,
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<EffectRequest>()
            .init_resource::<EffectsTrigger>()
            .init_resource::<ParticlePool>()
            .init_resource::<ScreenShake>()
            .init_resource::<SoundLibrary>()
            .add_systems(Startup, load_sounds)
            .add_systems(OnEnter(GameState::Playing), (reset_effects, start_music))
            .add_systems(OnExit(GameState::Playing), stop_music)
            .add_systems(
                FixedUpdate,
                (trigger_effects, apply_visual_requests, update_particles)
                    .chain()
                    .in_set(TickSet::Effects),
            )
            .add_systems(FixedUpdate, process_pickups.in_set(TickSet::Progress))
            .add_systems(
                Update,
                (play_audio_cues, draw_particles).run_if(in_state(GameState::Playing)),
            );
    }
}
