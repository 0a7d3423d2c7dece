//! Animation state machine and playback.
//!
//! Picks the player's animation state from locomotion signals every frame
//! and steps the frame index at a fixed delay.

use bevy::prelude::*;

use crate::movement::{Facing, FrameReport};

/// Seconds per animation frame.
pub const FRAME_DELAY: f32 = 0.15;

pub const WALK_FRAMES: u32 = 8;
pub const JUMP_FRAMES: u32 = 4;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Ladder,
}

impl AnimationState {
    /// Number of frames in the state's cycle. Ladder reuses the walk frames.
    pub fn frame_count(self) -> u32 {
        match self {
            AnimationState::Idle => 1,
            AnimationState::Walk | AnimationState::Ladder => WALK_FRAMES,
            AnimationState::Jump => JUMP_FRAMES,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk | AnimationState::Ladder => "walk",
            AnimationState::Jump => "jump",
        }
    }
}

/// Locomotion signals the state machine reads each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationInput {
    pub moving: bool,
    pub jumping: bool,
    pub grounded: bool,
    pub on_ladder: bool,
    pub moving_on_ladder: bool,
    pub facing: Facing,
}

impl From<&FrameReport> for AnimationInput {
    fn from(report: &FrameReport) -> Self {
        Self {
            moving: report.moving_horizontally,
            jumping: report.jumping,
            grounded: report.grounded,
            on_ladder: report.on_ladder,
            moving_on_ladder: report.moving_on_ladder,
            facing: report.facing,
        }
    }
}

/// Animation playback for the player sprite.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerAnimation {
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Time accumulator for frame timing. Keeps running while idle.
    pub frame_timer: f32,
    pub facing: Facing,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            facing: Facing::Right,
        }
    }
}

impl PlayerAnimation {
    pub fn update(&mut self, dt: f32, input: AnimationInput) {
        self.frame_timer += dt;
        self.facing = input.facing;

        self.state = if input.on_ladder {
            AnimationState::Ladder
        } else if input.jumping || !input.grounded {
            AnimationState::Jump
        } else if input.moving {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        };

        let should_animate = if input.on_ladder {
            input.moving_on_ladder
        } else {
            (input.moving && self.state == AnimationState::Walk)
                || (input.jumping && self.state == AnimationState::Jump)
        };

        if !should_animate {
            self.current_frame = 0;
            return;
        }

        if self.frame_timer >= FRAME_DELAY {
            self.current_frame = (self.current_frame + 1) % self.state.frame_count();
            self.frame_timer = 0.0;
        }
    }

    /// Frame index clamped to the state's cycle, for texture lookup.
    pub fn frame_index(&self) -> usize {
        self.current_frame.min(self.state.frame_count() - 1) as usize
    }

    /// Asset key for the current frame, e.g. "walk_3" (1-indexed like the files).
    pub fn current_sprite_key(&self) -> String {
        match self.state {
            AnimationState::Idle => "idle".to_string(),
            state => format!("{}_{}", state.suffix(), self.frame_index() + 1),
        }
    }

    /// Left-facing frames are the right-facing art mirrored at render time.
    pub fn flip_x(&self) -> bool {
        !self.facing.is_right()
    }
}

/// Steps the player's animation from this tick's movement report.
pub fn update_player_animation(
    time: Res<Time>,
    report: Res<FrameReport>,
    mut query: Query<&mut PlayerAnimation>,
) {
    let input = AnimationInput::from(&*report);
    for mut animation in &mut query {
        animation.update(time.delta_secs(), input);
    }
}
