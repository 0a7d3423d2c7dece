//! Effects domain: dust particles and screen shake.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Downward pull applied to every particle each tick.
const PARTICLE_GRAVITY: f32 = 0.1;

const DUST_PALETTE: [Color; 2] = [
    Color::srgb(210.0 / 255.0, 180.0 / 255.0, 140.0 / 255.0),
    Color::srgb(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0),
];
const TRAIL_PALETTE: [Color; 2] = [Color::srgb(0.5, 0.5, 0.5), Color::BLACK];

const JUMP_DUST: usize = 10;
const JUMP_TRAILS: usize = 6;
const LAND_DUST: usize = 12;
const JUMP_DROP: f32 = 25.0;
const LAND_DROP: f32 = 20.0;

/// Chance per tick of a trail particle while airborne and moving.
pub const TRAIL_CHANCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Jump,
    Land,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub size: f32,
    pub lifetime: f32,
    pub color: Color,
}

impl Particle {
    fn dust(rng: &mut ChaCha8Rng, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.random_range(-1.5..=1.5), rng.random_range(0.5..=2.0)),
            size: rng.random_range(2..=5) as f32,
            lifetime: rng.random_range(0.4..=0.8),
            color: DUST_PALETTE[rng.random_range(0..DUST_PALETTE.len())],
        }
    }

    fn trail(rng: &mut ChaCha8Rng, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.random_range(-0.3..=0.3), rng.random_range(-0.2..=0.2)),
            size: rng.random_range(1..=3) as f32,
            lifetime: rng.random_range(0.2..=0.4),
            color: TRAIL_PALETTE[rng.random_range(0..TRAIL_PALETTE.len())],
        }
    }

    fn update(&mut self, dt: f32) {
        self.position += self.velocity;
        self.velocity.y -= PARTICLE_GRAVITY;
        self.lifetime -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Every live particle, dust and trail alike.
#[derive(Resource, Debug)]
pub struct ParticlePool {
    pub particles: Vec<Particle>,
    rng: ChaCha8Rng,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl ParticlePool {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn a burst around the player's center.
    pub fn burst(&mut self, kind: BurstKind, center: Vec2) {
        match kind {
            BurstKind::Jump => {
                let origin = center - Vec2::new(0.0, JUMP_DROP);
                for _ in 0..JUMP_DUST {
                    let particle = Particle::dust(&mut self.rng, origin);
                    self.particles.push(particle);
                }
                for _ in 0..JUMP_TRAILS {
                    let particle = Particle::trail(&mut self.rng, origin);
                    self.particles.push(particle);
                }
            }
            BurstKind::Land => {
                let origin = center - Vec2::new(0.0, LAND_DROP);
                for _ in 0..LAND_DUST {
                    let mut particle = Particle::dust(&mut self.rng, origin);
                    particle.velocity.y = self.rng.random_range(-1.0..=0.2);
                    self.particles.push(particle);
                }
            }
        }
    }

    /// Roll for a single trail particle below the player's center.
    pub fn maybe_trail(&mut self, center: Vec2) -> bool {
        if !self.rng.random_bool(TRAIL_CHANCE) {
            return false;
        }
        let particle = Particle::trail(&mut self.rng, center - Vec2::new(0.0, JUMP_DROP));
        self.particles.push(particle);
        true
    }

    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Short camera jitter after jumps and landings.
#[derive(Resource, Debug)]
pub struct ScreenShake {
    pub timer: f32,
    pub intensity: f32,
    offset: Vec2,
    rng: ChaCha8Rng,
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self {
            timer: 0.0,
            intensity: 0.0,
            offset: Vec2::ZERO,
            rng: ChaCha8Rng::seed_from_u64(1),
        }
    }
}

impl ScreenShake {
    pub fn start(&mut self, duration: f32, intensity: f32) {
        self.timer = duration;
        self.intensity = intensity;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Count down and pick this tick's offset, uniform in `±intensity * 0.7`.
    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }

        self.offset = if self.is_active() {
            let max = self.intensity * 0.7;
            Vec2::new(
                self.rng.random_range(-max..=max),
                self.rng.random_range(-max..=max),
            )
        } else {
            Vec2::ZERO
        };
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.offset = Vec2::ZERO;
    }
}
