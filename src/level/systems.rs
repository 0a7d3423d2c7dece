//! Level domain: session setup and level geometry visuals.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::level::{DOOR_SIZE, KEY_SIZE, LADDER_TILE_SIZE, LevelSession, WorldBounds};
use crate::physics::GameLayer;

const BACKGROUND_Z: f32 = -10.0;
const LADDER_Z: f32 = -2.0;
const WALL_Z: f32 = -1.0;
const DOOR_Z: f32 = -1.5;
const KEY_Z: f32 = 1.0;

/// Marker for every entity belonging to the spawned level geometry
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Visual for a collectible key, keyed by `LevelKey::id`
#[derive(Component, Debug)]
pub struct KeySprite {
    pub id: usize,
}

/// Marker for door visuals
#[derive(Component, Debug)]
pub struct DoorSprite;

/// Which session generation the spawned visuals belong to.
#[derive(Resource, Debug, Default)]
pub struct LevelVisuals {
    pub generation: Option<u64>,
}

pub(crate) fn setup_level_session(mut commands: Commands, registry: Res<ContentRegistry>) {
    commands.insert_resource(LevelSession::new(registry.levels.clone()));
}

/// Rebuild the level sprites whenever the session loads a new level instance.
pub(crate) fn sync_level_visuals(
    mut commands: Commands,
    session: Res<LevelSession>,
    bounds: Res<WorldBounds>,
    mut visuals: ResMut<LevelVisuals>,
    mut clear_color: ResMut<ClearColor>,
    existing: Query<Entity, With<LevelEntity>>,
) {
    if visuals.generation == Some(session.generation()) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let level = session.current();
    let wall_color = Color::srgb(0.35, 0.33, 0.3);
    let ladder_color = Color::srgb(0.55, 0.38, 0.2);
    let key_color = Color::srgb(0.95, 0.8, 0.2);
    let door_color = Color::srgb(0.4, 0.22, 0.12);

    clear_color.0 = level.background;

    // Static mirrors of the engine's obstacles, seen by spatial queries
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let ladder_layers = CollisionLayers::new(GameLayer::Ladder, [GameLayer::Player]);
    let door_layers = CollisionLayers::new(GameLayer::Door, [GameLayer::Player]);
    let key_layers = CollisionLayers::new(GameLayer::Key, [GameLayer::Player]);

    let world_size = bounds.size();
    let world_center = Vec2::new(bounds.left, bounds.bottom) + world_size * 0.5;
    commands.spawn((
        LevelEntity,
        Sprite {
            color: level.background,
            custom_size: Some(world_size),
            ..default()
        },
        Transform::from_translation(world_center.extend(BACKGROUND_Z)),
    ));

    for wall in &level.walls {
        commands.spawn((
            LevelEntity,
            Sprite {
                color: wall_color,
                custom_size: Some(wall.size()),
                ..default()
            },
            Transform::from_translation(wall.center().extend(WALL_Z)),
            RigidBody::Static,
            Collider::rectangle(wall.width(), wall.height()),
            ground_layers,
        ));
    }

    for ladder in &level.ladders {
        commands.spawn((
            LevelEntity,
            Sprite {
                color: ladder_color,
                custom_size: Some(LADDER_TILE_SIZE * Vec2::new(0.6, 1.0)),
                ..default()
            },
            Transform::from_translation(ladder.center().extend(LADDER_Z)),
            RigidBody::Static,
            Collider::rectangle(ladder.width(), ladder.height()),
            Sensor,
            ladder_layers,
        ));
    }

    for door in &level.doors {
        commands.spawn((
            LevelEntity,
            DoorSprite,
            Sprite {
                color: door_color,
                custom_size: Some(DOOR_SIZE),
                ..default()
            },
            Transform::from_translation(door.center().extend(DOOR_Z)),
            RigidBody::Static,
            Collider::rectangle(DOOR_SIZE.x, DOOR_SIZE.y),
            Sensor,
            door_layers,
        ));
    }

    for key in &level.keys {
        commands.spawn((
            LevelEntity,
            KeySprite { id: key.id },
            Sprite {
                color: key_color,
                custom_size: Some(KEY_SIZE),
                ..default()
            },
            Transform::from_translation(key.bounds.center().extend(KEY_Z)),
            RigidBody::Static,
            Collider::rectangle(KEY_SIZE.x, KEY_SIZE.y),
            Sensor,
            key_layers,
        ));
    }

    visuals.generation = Some(session.generation());
    debug!(
        "Spawned level '{}': {} walls, {} ladders, {} keys, {} doors",
        level.name,
        level.walls.len(),
        level.ladders.len(),
        level.keys.len(),
        level.doors.len()
    );
}

/// Despawn key sprites whose key has been picked up.
pub(crate) fn despawn_collected_keys(
    mut commands: Commands,
    session: Res<LevelSession>,
    key_sprites: Query<(Entity, &KeySprite)>,
) {
    let keys = &session.current().keys;
    for (entity, sprite) in &key_sprites {
        if !keys.iter().any(|key| key.id == sprite.id) {
            commands.entity(entity).despawn();
        }
    }
}

/// Brighten doors once the level's keys are all collected.
pub(crate) fn update_door_tint(
    session: Res<LevelSession>,
    mut doors: Query<&mut Sprite, With<DoorSprite>>,
) {
    let color = if session.current().keys_remaining() == 0 {
        Color::srgb(0.85, 0.6, 0.25)
    } else {
        Color::srgb(0.4, 0.22, 0.12)
    };
    for mut sprite in &mut doors {
        sprite.color = color;
    }
}

pub(crate) fn cleanup_level_visuals(
    mut commands: Commands,
    mut visuals: ResMut<LevelVisuals>,
    existing: Query<Entity, With<LevelEntity>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    visuals.generation = None;
}
