//! Movement domain: player locomotion, ladder climbing and jump arbitration.

mod components;
mod controller;
mod resources;
mod systems;


pub use components::{Facing, Player};
pub use controller::{FrameReport, MovementController, NEVER_GROUNDED};
pub use resources::{InputState, MovementTuning};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::physics::{PlatformerEngine, PlayerKinematics};
use crate::movement::systems::{
    PlayerRig, despawn_player, read_input, spawn_player, sync_player_rig, tick_player,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        let tuning = MovementTuning::default();
        let idle_engine = PlatformerEngine::new(
            PlayerKinematics::new(Vec2::ZERO, tuning.player_size),
            tuning.gravity,
            Vec::new(),
            Vec::new(),
        );

        app.insert_resource(tuning)
            .insert_resource(idle_engine)
            .init_resource::<InputState>()
            .init_resource::<FrameReport>()
            .init_resource::<PlayerRig>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(OnExit(GameState::Playing), despawn_player)
            .add_systems(
                PreUpdate,
                read_input
                    .after(InputSystems)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (sync_player_rig, tick_player)
                    .chain()
                    .in_set(TickSet::Control),
            );
    }
}
