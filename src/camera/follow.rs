//! Camera domain: smoothed follow filter clamped to the world.

use bevy::prelude::*;

use crate::level::WorldBounds;

/// Fraction of the remaining distance covered each tick.
pub const CAMERA_LERP: f32 = 0.12;

pub const VIEWPORT_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Follow state of the world camera. Shake never feeds back into `position`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraFollow {
    pub position: Vec2,
    pub viewport: Vec2,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            position: VIEWPORT_SIZE * 0.5,
            viewport: VIEWPORT_SIZE,
        }
    }
}

impl CameraFollow {
    pub fn new(position: Vec2, viewport: Vec2) -> Self {
        Self { position, viewport }
    }

    /// Move a fixed fraction toward `target`, then keep the view inside the world.
    pub fn follow(&mut self, target: Vec2, bounds: &WorldBounds) -> Vec2 {
        let smooth = self.position + (target - self.position) * CAMERA_LERP;
        self.position = self.clamp(smooth, bounds);
        self.position
    }

    /// Jump straight to `target`, clamped.
    pub fn snap(&mut self, target: Vec2, bounds: &WorldBounds) {
        self.position = self.clamp(target, bounds);
    }

    fn clamp(&self, point: Vec2, bounds: &WorldBounds) -> Vec2 {
        let half = self.viewport * 0.5;
        Vec2::new(
            clamp_axis(point.x, bounds.left + half.x, bounds.right - half.x),
            clamp_axis(point.y, bounds.bottom + half.y, bounds.top - half.y),
        )
    }
}

/// Like `f32::clamp` but tolerates a world narrower than the viewport,
/// where the lower limit wins.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
