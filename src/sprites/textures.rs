//! Player texture handles and sprite syncing.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::Player;
use crate::sprites::{JUMP_FRAMES, PlayerAnimation, WALK_FRAMES};

const PLAYER_IMAGE_DIR: &str = "images/player";

/// Loaded player frame textures, keyed by sprite key ("idle", "walk_1", ...).
#[derive(Resource, Default)]
pub struct PlayerTextures {
    pub textures: HashMap<String, Handle<Image>>,
}

impl PlayerTextures {
    /// Every sprite key the animation can ask for.
    pub fn sprite_keys() -> Vec<String> {
        let walk = (1..=WALK_FRAMES).map(|i| format!("walk_{}", i));
        let jump = (1..=JUMP_FRAMES).map(|i| format!("jump_{}", i));
        std::iter::once("idle".to_string())
            .chain(walk)
            .chain(jump)
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&Handle<Image>> {
        self.textures.get(key)
    }
}

pub(crate) fn load_player_textures(
    mut textures: ResMut<PlayerTextures>,
    asset_server: Res<AssetServer>,
) {
    for key in PlayerTextures::sprite_keys() {
        let handle = asset_server.load(format!("{}/{}.png", PLAYER_IMAGE_DIR, key));
        textures.textures.insert(key, handle);
    }
    debug!("Queued {} player textures", textures.textures.len());
}

/// Give a freshly spawned player its animation component.
pub(crate) fn attach_player_animation(
    mut commands: Commands,
    query: Query<Entity, (Added<Player>, Without<PlayerAnimation>)>,
) {
    for entity in &query {
        commands.entity(entity).insert(PlayerAnimation::default());
    }
}

/// Show the current animation frame. Until its texture has loaded the
/// player keeps the plain placeholder rectangle.
pub(crate) fn sync_player_sprite(
    textures: Res<PlayerTextures>,
    asset_server: Res<AssetServer>,
    mut query: Query<(&PlayerAnimation, &mut Sprite)>,
) {
    for (animation, mut sprite) in &mut query {
        sprite.flip_x = animation.flip_x();

        let Some(handle) = textures.get(&animation.current_sprite_key()) else {
            continue;
        };
        if asset_server.is_loaded_with_dependencies(handle) && sprite.image != *handle {
            sprite.image = handle.clone();
            sprite.color = Color::WHITE;
        }
    }
}
