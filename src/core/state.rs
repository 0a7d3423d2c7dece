//! Core domain: game state definitions and tick ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    Playing,
    Completed,
}

/// Fixed-tick phases, run in this order while playing.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum TickSet {
    /// Controller pre-step, physics step, post-step corrections.
    Control,
    Animate,
    Effects,
    /// Key pickups and doors.
    Progress,
    Camera,
}
