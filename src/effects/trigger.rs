//! Effects domain: maps movement signals to cosmetic requests.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::effects::BurstKind;
use crate::movement::FrameReport;

/// Minimum seconds between footstep sounds.
pub const STEP_INTERVAL: f32 = 0.3;

pub const JUMP_CUE_VOLUME: f32 = 0.2;
pub const FOOTSTEP_CUE_VOLUME: f32 = 0.1;
pub const KEY_CUE_VOLUME: f32 = 0.5;

const JUMP_SHAKE: (f32, f32) = (0.08, 2.0);
const LAND_SHAKE: (f32, f32) = (0.1, 3.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Jump,
    Footstep,
    Key,
}

/// A cosmetic request for the particle, camera or audio sinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectRequest {
    Burst { kind: BurstKind, position: Vec2 },
    /// One trail particle, subject to the pool's chance roll.
    Trail { position: Vec2 },
    Shake { duration: f32, intensity: f32 },
    Cue { cue: AudioCue, volume: f32 },
}

impl Message for EffectRequest {}

/// Footstep cadence plus the signal-to-request mapping. Never touches
/// controller or physics state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EffectsTrigger {
    pub since_last_step: f32,
}

impl Default for EffectsTrigger {
    fn default() -> Self {
        // First step of a session sounds immediately
        Self {
            since_last_step: STEP_INTERVAL,
        }
    }
}

impl EffectsTrigger {
    pub fn on_frame(&mut self, report: &FrameReport, dt: f32) -> Vec<EffectRequest> {
        let mut requests = Vec::new();

        self.since_last_step += dt;
        if report.walking && self.since_last_step > STEP_INTERVAL {
            requests.push(EffectRequest::Cue {
                cue: AudioCue::Footstep,
                volume: FOOTSTEP_CUE_VOLUME,
            });
            self.since_last_step = 0.0;
        }

        if report.jump_started {
            requests.push(EffectRequest::Burst {
                kind: BurstKind::Jump,
                position: report.position,
            });
            requests.push(EffectRequest::Shake {
                duration: JUMP_SHAKE.0,
                intensity: JUMP_SHAKE.1,
            });
            requests.push(EffectRequest::Cue {
                cue: AudioCue::Jump,
                volume: JUMP_CUE_VOLUME,
            });
        } else if report.landed {
            requests.push(EffectRequest::Burst {
                kind: BurstKind::Land,
                position: report.position,
            });
            requests.push(EffectRequest::Shake {
                duration: LAND_SHAKE.0,
                intensity: LAND_SHAKE.1,
            });
        }

        if !report.grounded && report.moved_horizontally {
            requests.push(EffectRequest::Trail {
                position: report.position,
            });
        }

        requests
    }
}
