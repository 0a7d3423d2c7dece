//! Debug domain: hotkeys and the info overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::level::LevelSession;
use crate::movement::{FrameReport, MovementController, Player};
use crate::physics::{GameLayer, PhysicsFacade, PlatformerEngine};
use crate::sprites::PlayerAnimation;

/// N/P jump to the next/previous level, wrapping; F1 toggles the overlay.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut session: ResMut<LevelSession>,
) {
    let offset = if keyboard.just_pressed(KeyCode::KeyN) {
        1
    } else if keyboard.just_pressed(KeyCode::KeyP) {
        -1
    } else {
        0
    };

    if offset != 0 {
        let index = session.cycle(offset);
        let msg = format!("Warped to level {}", index + 1);
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }

    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the debug info overlay with current movement state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    session: Res<LevelSession>,
    report: Res<FrameReport>,
    engine: Res<PlatformerEngine>,
    spatial_query: SpatialQuery,
    player_query: Query<
        (&MovementController, &Collider, Option<&PlayerAnimation>),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Ok((controller, collider, animation)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    else {
        return;
    };

    let kinematics = engine.kinematics();
    let level_filter = SpatialQueryFilter::from_mask([
        GameLayer::Ground,
        GameLayer::Ladder,
        GameLayer::Key,
        GameLayer::Door,
    ]);
    let touching = spatial_query
        .shape_intersections(collider, kinematics.center, 0.0, &level_filter)
        .len();
    let animation = animation
        .map(|a| format!("{:?} #{}", a.state, a.current_frame))
        .unwrap_or_else(|| "-".to_string());
    let status = debug_state
        .status_message
        .as_ref()
        .map(|(msg, _)| msg.as_str())
        .unwrap_or("");

    **text = format!(
        "Level: {} ({}/{})\nPos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nGrounded: {}  Ladder: {}  Touching: {}\nSince ground: {:.2}  Buffer: {:.2}\nAnim: {}\nKeys left: {}\n{}",
        session.current().id,
        session.index() + 1,
        session.level_count(),
        kinematics.center.x,
        kinematics.center.y,
        kinematics.velocity.x,
        kinematics.velocity.y,
        report.grounded,
        report.on_ladder,
        touching,
        controller.time_since_ground.min(99.0),
        controller.jump_buffer_timer.max(0.0),
        animation,
        session.current().keys_remaining(),
        status
    );
}

pub(crate) fn cleanup_debug_overlay(
    mut commands: Commands,
    query: Query<Entity, With<DebugInfoOverlay>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
