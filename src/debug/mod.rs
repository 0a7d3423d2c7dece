//! Debug tools for fast iteration on levels and movement feel.
//!
//! Features:
//! - N/P to cycle levels (wrapping)
//! - F1 to toggle a movement info overlay

mod state;
mod systems;
mod ui;


pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    cleanup_debug_overlay, handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_debug_overlay);
    }
}
