//! Level domain: world bounds and the runtime level built from a descriptor.

use bevy::prelude::*;

use crate::content::{LevelDef, TILE_STRIDE};
use crate::physics::{GameLayer, Obstacle};

pub const WORLD_WIDTH: f32 = 2000.0;
pub const WORLD_HEIGHT: f32 = 900.0;

pub const LADDER_TILE_SIZE: Vec2 = Vec2::new(64.0, 64.0);
pub const KEY_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const DOOR_SIZE: Vec2 = Vec2::new(80.0, 128.0);

/// Playable extent of every level.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: WORLD_WIDTH,
            bottom: 0.0,
            top: WORLD_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.top - self.bottom)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }
}

/// A collectible key. `id` is stable for the lifetime of the level instance
/// so visuals can follow removals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelKey {
    pub id: usize,
    pub bounds: Rect,
}

/// One level instance: static geometry plus the keys still lying around.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub spawn: Vec2,
    pub background: Color,
    pub walls: Vec<Rect>,
    pub ladders: Vec<Rect>,
    pub keys: Vec<LevelKey>,
    pub doors: Vec<Rect>,
}

impl Level {
    pub fn from_def(def: &LevelDef) -> Self {
        let walls = def
            .platforms
            .iter()
            .flat_map(|platform| {
                let size = Vec2::new(platform.tile_size.0, platform.tile_size.1);
                (0..platform.tiles).map(move |i| {
                    let center = Vec2::new(platform.x + i as f32 * TILE_STRIDE, platform.y);
                    Rect::from_center_size(center, size)
                })
            })
            .collect();

        let ladders = def
            .ladders
            .iter()
            .flat_map(|ladder| {
                ladder
                    .tile_centers()
                    .into_iter()
                    .map(|y| Rect::from_center_size(Vec2::new(ladder.x, y), LADDER_TILE_SIZE))
            })
            .collect();

        let keys = def
            .keys
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| LevelKey {
                id,
                bounds: Rect::from_center_size(Vec2::new(x, y), KEY_SIZE),
            })
            .collect();

        let doors = def
            .doors
            .iter()
            .map(|&(x, y)| Rect::from_center_size(Vec2::new(x, y), DOOR_SIZE))
            .collect();

        let (r, g, b) = def.background;

        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            spawn: Vec2::new(def.spawn.0, def.spawn.1),
            background: Color::srgb_u8(r, g, b),
            walls,
            ladders,
            keys,
            doors,
        }
    }

    pub fn keys_remaining(&self) -> usize {
        self.keys.len()
    }

    /// Remove every key overlapping `player` and return the removed ids.
    pub fn collect_keys(&mut self, player: Rect) -> Vec<usize> {
        let mut collected = Vec::new();
        self.keys.retain(|key| {
            let key_shape = Obstacle::new(key.bounds, GameLayer::Key, player.size());
            if key_shape.overlaps(player.center()) {
                collected.push(key.id);
                false
            } else {
                true
            }
        });
        collected
    }

    /// A door only opens once every key in the level has been collected.
    pub fn door_unlocked_at(&self, player: Rect) -> bool {
        self.keys.is_empty()
            && self.doors.iter().any(|door| {
                Obstacle::new(*door, GameLayer::Door, player.size()).overlaps(player.center())
            })
    }
}
