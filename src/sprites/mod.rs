//! Sprites module for player animation and rendering.
//!
//! This module handles:
//! - The player animation state machine and frame playback
//! - Loading player frame textures
//! - Mirroring left-facing frames with `Sprite::flip_x`

pub mod animation;
pub mod textures;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use textures::PlayerTextures;

use crate::core::{GameState, TickSet};
use crate::sprites::textures::{attach_player_animation, load_player_textures, sync_player_sprite};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTextures>()
            .add_systems(Startup, load_player_textures)
            .add_systems(FixedUpdate, update_player_animation.in_set(TickSet::Animate))
            .add_systems(
                Update,
                (attach_player_animation, sync_player_sprite)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
