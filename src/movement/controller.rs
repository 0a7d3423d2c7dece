//! Movement domain: the per-frame movement and jump controller.
//!
//! One `tick` per frame resolves horizontal input, ladder climbing and jump
//! arbitration, steps the physics facade, then applies world-limit
//! corrections. The returned [`FrameReport`] carries every signal the
//! animation, effects and progression systems read.

use bevy::prelude::*;

use crate::level::WorldBounds;
use crate::movement::{Facing, InputState, MovementTuning};
use crate::physics::{PhysicsFacade, PlayerKinematics};

/// `time_since_ground` before the first touchdown; far beyond any coyote window.
pub const NEVER_GROUNDED: f32 = 999.0;

/// Signals produced by one controller tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub grounded: bool,
    pub on_ladder: bool,
    pub moving_horizontally: bool,
    /// A horizontal move survived the world-edge clamp.
    pub moved_horizontally: bool,
    pub moving_on_ladder: bool,
    /// Moving along the ground, not on a ladder and not mid-jump.
    pub walking: bool,
    /// Rising after the step and not on a ladder.
    pub jumping: bool,
    /// Fires once per ascent.
    pub jump_started: bool,
    /// Fires once per touchdown that ends a jump.
    pub landed: bool,
    pub jump_issued: bool,
    pub respawned: bool,
    pub facing: Facing,
    /// Player center after the step and corrections.
    pub position: Vec2,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementController {
    pub jump_buffer_timer: f32,
    pub time_since_ground: f32,
    pub jumps_left: u8,
    pub was_jumping: bool,
    pub facing: Facing,
    /// Last horizontal direction pressed, -1 or +1.
    pub last_direction: i8,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&MovementTuning::default())
    }
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            jump_buffer_timer: 0.0,
            time_since_ground: NEVER_GROUNDED,
            jumps_left: tuning.max_jumps,
            was_jumping: false,
            facing: Facing::Right,
            last_direction: 1,
        }
    }

    /// Back to session-start state, used on respawn and level switch.
    pub fn reset(&mut self, tuning: &MovementTuning) {
        *self = Self::new(tuning);
    }

    /// Jump button went down: arm the buffer immediately.
    pub fn press_jump(&mut self, input: &mut InputState, tuning: &MovementTuning) {
        input.jump_pressed = true;
        self.jump_buffer_timer = tuning.jump_buffer_time;
    }

    /// Jump button went up: shorten the jump if still rising.
    pub fn release_jump(
        &mut self,
        input: &mut InputState,
        kinematics: &mut PlayerKinematics,
        tuning: &MovementTuning,
    ) {
        input.jump_pressed = false;
        if kinematics.velocity.y > 0.0 {
            kinematics.velocity.y *= tuning.jump_release_cut;
        }
    }

    /// A respawn drops the latched jump along with the controller state.
    pub fn tick<P: PhysicsFacade>(
        &mut self,
        input: &mut InputState,
        physics: &mut P,
        tuning: &MovementTuning,
        bounds: &WorldBounds,
        spawn: Vec2,
        dt: f32,
    ) -> FrameReport {
        let on_ladder = physics.query_on_ladder();
        let grounded = physics.query_grounded(tuning.ground_tolerance);

        let (move_x, moving_horizontally) = self.resolve_horizontal(input, physics, tuning, bounds);

        let mut vy = physics.kinematics().velocity.y;
        let mut moving_on_ladder = false;
        if on_ladder {
            (vy, moving_on_ladder) = resolve_ladder(input, physics, tuning, bounds);
        }
        physics.set_desired_velocity(move_x, vy);

        let walking = moving_horizontally && grounded && !on_ladder && !self.was_jumping;
        let mut jump_started = false;
        let mut landed = false;
        let mut jump_issued = false;

        if on_ladder {
            self.was_jumping = true;
            self.time_since_ground = 0.0;
        } else {
            if !self.was_jumping && vy > 0.0 {
                self.was_jumping = true;
                jump_started = true;
                debug!("Jump started at {:?}", physics.kinematics().center);
            } else if self.was_jumping && grounded {
                self.was_jumping = false;
                landed = true;
                debug!("Landed at {:?}", physics.kinematics().center);
            }

            jump_issued = self.arbitrate_jump(input, physics, tuning, grounded, dt);
        }

        physics.step(dt);
        let respawned = self.apply_world_limits(physics, tuning, bounds, spawn);
        if respawned {
            input.jump_pressed = false;
        }
        let kinematics = physics.kinematics();

        FrameReport {
            grounded,
            on_ladder,
            moving_horizontally,
            moved_horizontally: move_x != 0.0,
            moving_on_ladder,
            walking,
            jumping: kinematics.velocity.y > 0.0 && !on_ladder,
            jump_started,
            landed,
            jump_issued,
            respawned,
            facing: self.facing,
            position: kinematics.center,
        }
    }

    /// Returns the horizontal move for this frame and whether a direction
    /// was held. Snaps to the world edge instead of crossing it.
    fn resolve_horizontal<P: PhysicsFacade>(
        &mut self,
        input: &InputState,
        physics: &mut P,
        tuning: &MovementTuning,
        bounds: &WorldBounds,
    ) -> (f32, bool) {
        let (mut move_x, moving) = match (input.left, input.right) {
            (true, false) => {
                self.last_direction = -1;
                (-tuning.move_speed, true)
            }
            (false, true) => {
                self.last_direction = 1;
                (tuning.move_speed, true)
            }
            _ => (0.0, false),
        };
        self.facing = Facing::from_direction(self.last_direction);

        let kinematics = physics.kinematics_mut();
        let half_width = kinematics.half_size().x;
        let next_x = kinematics.center.x + move_x;

        if next_x - half_width < bounds.left {
            move_x = 0.0;
            kinematics.center.x = bounds.left + half_width;
        } else if next_x + half_width > bounds.right {
            move_x = 0.0;
            kinematics.center.x = bounds.right - half_width;
        }

        (move_x, moving)
    }

    fn arbitrate_jump<P: PhysicsFacade>(
        &mut self,
        input: &InputState,
        physics: &mut P,
        tuning: &MovementTuning,
        grounded: bool,
        dt: f32,
    ) -> bool {
        if grounded {
            self.time_since_ground = 0.0;
            self.jumps_left = tuning.max_jumps;
        } else {
            self.time_since_ground += dt;
        }

        if self.jump_buffer_timer > 0.0 {
            self.jump_buffer_timer -= dt;
        }

        let want_jump = input.jump_pressed || self.jump_buffer_timer > 0.0;
        let can_coyote = self.time_since_ground <= tuning.coyote_time;

        if want_jump && (grounded || can_coyote) {
            physics.command_jump(tuning.jump_speed);
            self.jump_buffer_timer = 0.0;
            return true;
        }

        false
    }

    /// Keep the player inside the world vertically. Sinking through the
    /// floor sends the player back to `spawn`; returns whether that happened.
    fn apply_world_limits<P: PhysicsFacade>(
        &mut self,
        physics: &mut P,
        tuning: &MovementTuning,
        bounds: &WorldBounds,
        spawn: Vec2,
    ) -> bool {
        let kinematics = physics.kinematics_mut();
        let half_height = kinematics.half_size().y;
        let mut respawned = false;

        if kinematics.bottom() < bounds.bottom {
            kinematics.center.y = bounds.bottom + half_height;
            kinematics.velocity.y = 0.0;
            if kinematics.center.y < bounds.bottom + tuning.respawn_margin {
                kinematics.teleport(spawn);
                respawned = true;
            }
        }

        if kinematics.top() > bounds.top {
            kinematics.center.y = bounds.top - half_height;
            kinematics.velocity.y = 0.0;
        }

        if respawned {
            info!("Player fell out of the world, respawning at {:?}", spawn);
            self.reset(tuning);
        }

        respawned
    }
}

/// Vertical speed while on a ladder and whether the player is climbing.
fn resolve_ladder<P: PhysicsFacade>(
    input: &InputState,
    physics: &mut P,
    tuning: &MovementTuning,
    bounds: &WorldBounds,
) -> (f32, bool) {
    let kinematics = physics.kinematics_mut();
    let half_height = kinematics.half_size().y;

    match (input.up, input.down) {
        (true, false) => {
            if kinematics.center.y + tuning.ladder_speed + half_height > bounds.top {
                kinematics.center.y = bounds.top - half_height;
                (0.0, true)
            } else {
                (tuning.ladder_speed, true)
            }
        }
        (false, true) => {
            if kinematics.center.y - tuning.ladder_speed - half_height < bounds.bottom {
                kinematics.center.y = bounds.bottom + half_height;
                (0.0, true)
            } else {
                (-tuning.ladder_speed, true)
            }
        }
        _ => (0.0, false),
    }
}
