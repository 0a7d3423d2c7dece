//! Effects domain: per-tick effect systems and level progression.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameCompletedEvent;
use crate::effects::{
    AudioCue, EffectRequest, EffectsTrigger, KEY_CUE_VOLUME, ParticlePool, ScreenShake,
};
use crate::level::{LevelAdvance, LevelSession};
use crate::movement::{FrameReport, MovementTuning};

pub(crate) fn trigger_effects(
    time: Res<Time>,
    report: Res<FrameReport>,
    mut trigger: ResMut<EffectsTrigger>,
    mut requests: MessageWriter<EffectRequest>,
) {
    for request in trigger.on_frame(&report, time.delta_secs()) {
        requests.write(request);
    }
}

/// Feed particle and shake requests into their pools.
pub(crate) fn apply_visual_requests(
    mut requests: MessageReader<EffectRequest>,
    mut particles: ResMut<ParticlePool>,
    mut shake: ResMut<ScreenShake>,
) {
    for request in requests.read() {
        match *request {
            EffectRequest::Burst { kind, position } => particles.burst(kind, position),
            EffectRequest::Trail { position } => {
                particles.maybe_trail(position);
            }
            EffectRequest::Shake {
                duration,
                intensity,
            } => shake.start(duration, intensity),
            EffectRequest::Cue { .. } => {}
        }
    }
}

pub(crate) fn update_particles(
    time: Res<Time>,
    mut particles: ResMut<ParticlePool>,
    mut shake: ResMut<ScreenShake>,
) {
    let dt = time.delta_secs();
    particles.update(dt);
    shake.update(dt);
}

/// Pick up touched keys, then walk through an unlocked door.
pub(crate) fn process_pickups(
    report: Res<FrameReport>,
    tuning: Res<MovementTuning>,
    mut session: ResMut<LevelSession>,
    mut requests: MessageWriter<EffectRequest>,
    mut completed: MessageWriter<GameCompletedEvent>,
) {
    if session.is_completed() {
        return;
    }

    let player = Rect::from_center_size(report.position, tuning.player_size);

    let collected = session.current_mut().collect_keys(player);
    for _ in &collected {
        requests.write(EffectRequest::Cue {
            cue: AudioCue::Key,
            volume: KEY_CUE_VOLUME,
        });
    }
    if !collected.is_empty() {
        info!(
            "Collected {} key(s), {} remaining",
            collected.len(),
            session.current().keys_remaining()
        );
    }

    if !session.current().door_unlocked_at(player) {
        return;
    }

    match session.advance() {
        LevelAdvance::Next(index) => debug!("Door opened, moving to level {}", index + 1),
        LevelAdvance::Completed => {
            completed.write(GameCompletedEvent);
        }
    }
}

pub(crate) fn draw_particles(particles: Res<ParticlePool>, mut gizmos: Gizmos) {
    for particle in &particles.particles {
        gizmos.circle_2d(
            Isometry2d::from_translation(particle.position),
            particle.size,
            particle.color,
        );
    }
}

pub(crate) fn reset_effects(
    mut particles: ResMut<ParticlePool>,
    mut shake: ResMut<ScreenShake>,
    mut trigger: ResMut<EffectsTrigger>,
) {
    particles.clear();
    shake.reset();
    *trigger = EffectsTrigger::default();
}
