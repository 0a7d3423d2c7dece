//! Menu domain: main menu with play, settings, theme toggle and quit.

mod actions;
mod systems;
mod theme;

#[cfg(test)]
mod tests;

pub use actions::{MenuAction, MenuPage, VOLUME_STEP, step_volume};
pub use systems::{MenuButton, MenuPageState, MenuUI};
pub use theme::MenuTheme;

use bevy::prelude::*;

use crate::core::GameState;
use crate::menu::systems::{
    cleanup_menu, handle_menu_buttons, handle_menu_keys, open_main_page, rebuild_menu,
};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuPageState>()
            .add_systems(OnEnter(GameState::MainMenu), open_main_page)
            .add_systems(
                Update,
                (handle_menu_buttons, handle_menu_keys, rebuild_menu)
                    .chain()
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnExit(GameState::MainMenu), cleanup_menu);
    }
}
