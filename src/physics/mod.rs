//! Physics domain: the collision facade the movement controller drives.
//!
//! The controller never integrates motion itself. It queries grounded and
//! ladder state, writes the velocity it wants, and asks the facade to step.

mod engine;
mod obstacle;

#[cfg(test)]
mod tests;

pub use engine::PlatformerEngine;
pub use obstacle::Obstacle;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Tick rate the per-frame speeds are tuned against.
pub const REFERENCE_HZ: f32 = 60.0;

/// Overlap below this depth counts as touching, not colliding.
pub(crate) const CONTACT_EPSILON: f32 = 0.01;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid platforms and walls
    Ground,
    /// Climbable, never blocks movement
    Ladder,
    /// Player character
    Player,
    /// Collectible keys
    Key,
    /// Exit doors
    Door,
}

/// Authoritative player position and velocity.
///
/// Velocity is expressed in pixels per reference frame, so a speed of 6
/// moves the player 6 pixels per tick at [`REFERENCE_HZ`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerKinematics {
    pub center: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl PlayerKinematics {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    /// Move to `position` and drop all momentum.
    pub fn teleport(&mut self, position: Vec2) {
        self.center = position;
        self.velocity = Vec2::ZERO;
    }
}

/// Contract between the movement controller and whatever resolves collisions.
pub trait PhysicsFacade {
    /// Whether walkable geometry lies within `tolerance` pixels below the feet.
    fn query_grounded(&self, tolerance: f32) -> bool;

    /// Whether the player's bounds overlap climbable geometry.
    fn query_on_ladder(&self) -> bool;

    fn set_desired_velocity(&mut self, vx: f32, vy: f32);

    /// Launch upward at `speed`.
    fn command_jump(&mut self, speed: f32);

    /// Integrate position from velocity, gravity and collision response.
    fn step(&mut self, dt: f32);

    fn kinematics(&self) -> &PlayerKinematics;

    fn kinematics_mut(&mut self) -> &mut PlayerKinematics;
}
