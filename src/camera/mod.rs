//! Camera domain: world camera that trails the player.

mod follow;


pub use follow::{CAMERA_LERP, CameraFollow, VIEWPORT_SIZE};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::effects::ScreenShake;
use crate::level::{LevelSession, WorldBounds};
use crate::movement::FrameReport;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), reset_camera)
            .add_systems(OnExit(GameState::Playing), center_camera)
            .add_systems(FixedUpdate, follow_player.in_set(TickSet::Camera));
    }
}

fn setup_camera(mut commands: Commands) {
    let follow = CameraFollow::default();
    commands.spawn((
        Camera2d,
        follow,
        Transform::from_translation(follow.position.extend(0.0)),
    ));
}

/// Each play session starts with the camera on the spawn point.
fn reset_camera(
    session: Res<LevelSession>,
    bounds: Res<WorldBounds>,
    mut query: Query<(&mut CameraFollow, &mut Transform)>,
) {
    for (mut follow, mut transform) in &mut query {
        follow.snap(session.current().spawn, &bounds);
        transform.translation = follow.position.extend(transform.translation.z);
    }
}

/// Menus and the results screen are drawn around the screen center.
fn center_camera(mut query: Query<(&mut CameraFollow, &mut Transform)>) {
    for (mut follow, mut transform) in &mut query {
        *follow = CameraFollow::default();
        transform.translation = follow.position.extend(transform.translation.z);
    }
}

fn follow_player(
    report: Res<FrameReport>,
    bounds: Res<WorldBounds>,
    shake: Res<ScreenShake>,
    mut query: Query<(&mut CameraFollow, &mut Transform)>,
) {
    for (mut follow, mut transform) in &mut query {
        let position = follow.follow(report.position, &bounds) + shake.offset();
        transform.translation = position.extend(transform.translation.z);
    }
}
