//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Speeds are pixels per reference frame (see `physics::REFERENCE_HZ`),
/// times are seconds.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_speed: f32,
    pub ladder_speed: f32,
    pub gravity: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Jumps granted on touchdown. Tracked but not consulted by arbitration.
    pub max_jumps: u8,
    /// Fraction of upward speed kept when jump is released mid-ascent.
    pub jump_release_cut: f32,
    /// How far below the feet ground still counts as underfoot.
    pub ground_tolerance: f32,
    /// Depth under the world floor that sends the player back to spawn.
    pub respawn_margin: f32,
    pub player_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_speed: 20.0,
            ladder_speed: 3.0,
            gravity: 4.0,
            coyote_time: 0.08,
            jump_buffer_time: 0.12,
            max_jumps: 1,
            jump_release_cut: 0.45,
            ground_tolerance: 6.0,
            respawn_margin: 100.0,
            player_size: Vec2::new(48.0, 64.0),
        }
    }
}

/// Held directional keys plus the jump button state.
///
/// Directions are sampled every frame; `jump_pressed` only changes on
/// press and release edges.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_pressed: bool,
}
