//! UI domain: in-run HUD elements.

mod hud_banner;
mod hud_timer;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_banner::{cleanup_level_banner, spawn_level_banner, update_level_banner};
use crate::ui::hud_timer::{cleanup_timer_hud, spawn_timer_hud, update_timer_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_timer_hud, spawn_level_banner),
        )
        .add_systems(
            OnExit(GameState::Playing),
            (cleanup_timer_hud, cleanup_level_banner),
        )
        .add_systems(
            Update,
            (update_timer_hud, update_level_banner).run_if(in_state(GameState::Playing)),
        );
    }
}
