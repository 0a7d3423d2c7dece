//! Level domain: data-driven levels, progression and geometry visuals.

mod geometry;
mod session;
mod systems;

#[cfg(test)]
mod tests;

pub use geometry::{
    DOOR_SIZE, KEY_SIZE, LADDER_TILE_SIZE, Level, LevelKey, WORLD_HEIGHT, WORLD_WIDTH,
    WorldBounds,
};
pub use session::{LevelAdvance, LevelSession};
pub use systems::{KeySprite, LevelEntity};

use bevy::prelude::*;

use crate::content::load_content;
use crate::core::GameState;
use crate::level::systems::{
    LevelVisuals, cleanup_level_visuals, despawn_collected_keys, setup_level_session,
    sync_level_visuals, update_door_tint,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldBounds>()
            .init_resource::<LevelVisuals>()
            .add_systems(Startup, setup_level_session.after(load_content))
            .add_systems(
                Update,
                (sync_level_visuals, despawn_collected_keys, update_door_tint)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_level_visuals);
    }
}
