//! Physics domain: arcade-style kinematic platformer engine.

use bevy::prelude::*;

use crate::physics::{GameLayer, Obstacle, PhysicsFacade, PlayerKinematics, REFERENCE_HZ};

/// Largest distance moved before collisions are re-checked, so fast falls
/// cannot tunnel through thin platforms.
const MAX_SUBSTEP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Axis-separated kinematic engine over layered avian colliders.
///
/// [`GameLayer::Ground`] obstacles are solid on every side.
/// [`GameLayer::Ladder`] obstacles never block; while the player overlaps
/// one, gravity is suspended and the controller owns vertical speed.
#[derive(Resource, Debug, Clone)]
pub struct PlatformerEngine {
    kinematics: PlayerKinematics,
    gravity: f32,
    obstacles: Vec<Obstacle>,
}

impl PlatformerEngine {
    pub fn new(
        kinematics: PlayerKinematics,
        gravity: f32,
        walls: Vec<Rect>,
        ladders: Vec<Rect>,
    ) -> Self {
        let size = kinematics.size;
        let obstacles = walls
            .into_iter()
            .map(|rect| Obstacle::new(rect, GameLayer::Ground, size))
            .chain(
                ladders
                    .into_iter()
                    .map(|rect| Obstacle::new(rect, GameLayer::Ladder, size)),
            )
            .collect();
        Self {
            kinematics,
            gravity,
            obstacles,
        }
    }

    /// Number of obstacles on `layer`.
    pub fn count(&self, layer: GameLayer) -> usize {
        self.obstacles.iter().filter(|o| o.in_mask(layer)).count()
    }

    /// Obstacles on `layer` overlapping a player centered at `center`.
    fn hits(&self, layer: GameLayer, center: Vec2) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.in_mask(layer) && o.overlaps(center))
    }

    fn move_axis(&mut self, axis: Axis, delta: f32) {
        if delta == 0.0 {
            return;
        }

        let steps = (delta.abs() / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let increment = delta / steps as f32;

        for _ in 0..steps {
            match axis {
                Axis::X => self.kinematics.center.x += increment,
                Axis::Y => self.kinematics.center.y += increment,
            }
            if self.resolve(axis, increment) {
                break;
            }
        }
    }

    /// Push the player out of any ground hit while moving along `axis`.
    /// Returns whether ground was hit.
    fn resolve(&mut self, axis: Axis, increment: f32) -> bool {
        let half = self.kinematics.half_size();
        let hits: Vec<Rect> = self
            .hits(GameLayer::Ground, self.kinematics.center)
            .map(Obstacle::bounds)
            .collect();

        if hits.is_empty() {
            return false;
        }

        match axis {
            Axis::X if increment > 0.0 => {
                let limit = hits.iter().map(|w| w.min.x).fold(f32::INFINITY, f32::min);
                self.kinematics.center.x = limit - half.x;
            }
            Axis::X => {
                let limit = hits
                    .iter()
                    .map(|w| w.max.x)
                    .fold(f32::NEG_INFINITY, f32::max);
                self.kinematics.center.x = limit + half.x;
            }
            Axis::Y if increment > 0.0 => {
                let limit = hits.iter().map(|w| w.min.y).fold(f32::INFINITY, f32::min);
                self.kinematics.center.y = limit - half.y;
                self.kinematics.velocity.y = 0.0;
            }
            Axis::Y => {
                let limit = hits
                    .iter()
                    .map(|w| w.max.y)
                    .fold(f32::NEG_INFINITY, f32::max);
                self.kinematics.center.y = limit + half.y;
                self.kinematics.velocity.y = 0.0;
            }
        }

        true
    }
}

impl PhysicsFacade for PlatformerEngine {
    fn query_grounded(&self, tolerance: f32) -> bool {
        let below = self.kinematics.center - Vec2::Y * tolerance;
        self.hits(GameLayer::Ground, below).next().is_some()
    }

    fn query_on_ladder(&self) -> bool {
        self.hits(GameLayer::Ladder, self.kinematics.center)
            .next()
            .is_some()
    }

    fn set_desired_velocity(&mut self, vx: f32, vy: f32) {
        self.kinematics.velocity = Vec2::new(vx, vy);
    }

    fn command_jump(&mut self, speed: f32) {
        self.kinematics.velocity.y = speed;
    }

    fn step(&mut self, dt: f32) {
        let frames = dt * REFERENCE_HZ;

        if !self.query_on_ladder() {
            self.kinematics.velocity.y -= self.gravity * frames;
        }

        let delta = self.kinematics.velocity * frames;
        self.move_axis(Axis::X, delta.x);
        self.move_axis(Axis::Y, delta.y);
    }

    fn kinematics(&self) -> &PlayerKinematics {
        &self.kinematics
    }

    fn kinematics_mut(&mut self) -> &mut PlayerKinematics {
        &mut self.kinematics
    }
}
