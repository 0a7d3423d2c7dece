//! Core domain: game states, fixed-tick ordering and the run flow.

mod events;
mod resources;
mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use events::GameCompletedEvent;
pub use resources::{BANNER_DURATION, LevelBanner, RunClock, format_clock};
pub use state::{GameState, TickSet};

use bevy::prelude::*;

use crate::core::systems::{
    handle_game_completed, handle_playing_input, handle_results_input, start_run, tick_clock,
    transition_to_main_menu, update_banner,
};
use crate::core::ui::results::{cleanup_results_screen, spawn_results_screen};
use crate::physics::REFERENCE_HZ;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(REFERENCE_HZ as f64))
            .init_resource::<RunClock>()
            .init_resource::<LevelBanner>()
            .add_message::<GameCompletedEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Control,
                    TickSet::Animate,
                    TickSet::Effects,
                    TickSet::Progress,
                    TickSet::Camera,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Boot), transition_to_main_menu)
            .add_systems(OnEnter(GameState::Playing), start_run)
            .add_systems(
                Update,
                (
                    tick_clock,
                    update_banner,
                    handle_playing_input,
                    handle_game_completed,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Completed), spawn_results_screen)
            .add_systems(OnExit(GameState::Completed), cleanup_results_screen)
            .add_systems(
                Update,
                handle_results_input.run_if(in_state(GameState::Completed)),
            );
    }
}
