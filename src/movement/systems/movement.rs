//! Movement domain: player spawn, rig rebuild and the per-tick controller step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::{LevelSession, WorldBounds};
use crate::movement::{FrameReport, InputState, MovementController, MovementTuning, Player};
use crate::physics::{GameLayer, PhysicsFacade, PlatformerEngine, PlayerKinematics};

pub(crate) const PLAYER_Z: f32 = 5.0;

/// Level generation the physics rig was last built for.
#[derive(Resource, Debug, Default)]
pub(crate) struct PlayerRig {
    pub generation: Option<u64>,
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    session: Res<LevelSession>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        return;
    }

    let spawn = session.current().spawn;
    commands.spawn((
        Player,
        MovementController::new(&tuning),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(tuning.player_size),
            ..default()
        },
        Transform::from_translation(spawn.extend(PLAYER_Z)),
        // Moved by the controller; the collider mirrors it for spatial queries
        (
            RigidBody::Kinematic,
            Collider::rectangle(tuning.player_size.x, tuning.player_size.y),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Ladder,
                    GameLayer::Key,
                    GameLayer::Door,
                ],
            ),
        ),
    ));
    info!("Spawned player at {:?}", spawn);
}

pub(crate) fn despawn_player(
    mut commands: Commands,
    mut rig: ResMut<PlayerRig>,
    query: Query<Entity, With<Player>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    rig.generation = None;
}

/// Rebuild the physics rig at the spawn point whenever the session loads a
/// new level instance, and reset controller and input with it.
pub(crate) fn sync_player_rig(
    session: Res<LevelSession>,
    tuning: Res<MovementTuning>,
    mut rig: ResMut<PlayerRig>,
    mut engine: ResMut<PlatformerEngine>,
    mut input: ResMut<InputState>,
    mut report: ResMut<FrameReport>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    if rig.generation == Some(session.generation()) {
        return;
    }

    let level = session.current();
    *engine = PlatformerEngine::new(
        PlayerKinematics::new(level.spawn, tuning.player_size),
        tuning.gravity,
        level.walls.clone(),
        level.ladders.clone(),
    );
    *input = InputState::default();
    *report = FrameReport {
        position: level.spawn,
        ..default()
    };
    for mut controller in &mut query {
        controller.reset(&tuning);
    }

    rig.generation = Some(session.generation());
    debug!(
        "Player rig rebuilt for '{}' ({} walls, {} ladders)",
        level.id,
        engine.count(GameLayer::Ground),
        engine.count(GameLayer::Ladder)
    );
}

pub(crate) fn tick_player(
    time: Res<Time>,
    mut input: ResMut<InputState>,
    tuning: Res<MovementTuning>,
    bounds: Res<WorldBounds>,
    session: Res<LevelSession>,
    mut engine: ResMut<PlatformerEngine>,
    mut report: ResMut<FrameReport>,
    mut query: Query<(&mut MovementController, &mut Transform), With<Player>>,
) {
    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };

    *report = controller.tick(
        &mut input,
        &mut *engine,
        &tuning,
        &bounds,
        session.current().spawn,
        time.delta_secs(),
    );

    let center = engine.kinematics().center;
    transform.translation.x = center.x;
    transform.translation.y = center.y;
}
