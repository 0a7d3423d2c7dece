//! Core domain: game flow systems.

use bevy::app::AppExit;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::GameCompletedEvent;
use crate::core::resources::{LevelBanner, RunClock};
use crate::core::state::GameState;
use crate::level::LevelSession;

pub(crate) fn transition_to_main_menu(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::MainMenu);
}

/// Every entry into `Playing` is a fresh run from the first level.
pub(crate) fn start_run(
    mut session: ResMut<LevelSession>,
    mut clock: ResMut<RunClock>,
    mut banner: ResMut<LevelBanner>,
) {
    session.reset();
    clock.reset();
    *banner = LevelBanner::default();
    info!("Starting new run ({} levels)", session.level_count());
}

pub(crate) fn tick_clock(time: Res<Time>, mut clock: ResMut<RunClock>) {
    clock.tick(time.delta_secs());
}

/// Raise the banner whenever a new level instance loads.
pub(crate) fn update_banner(
    time: Res<Time>,
    session: Res<LevelSession>,
    mut banner: ResMut<LevelBanner>,
) {
    if banner.generation != Some(session.generation()) {
        banner.show(session.index() + 1, session.generation());
    }
    banner.tick(time.delta_secs());
}

pub(crate) fn handle_game_completed(
    mut events: MessageReader<GameCompletedEvent>,
    mut clock: ResMut<RunClock>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().next().is_none() {
        return;
    }
    let seconds = clock.finish();
    info!("Castle escaped in {}", crate::core::format_clock(seconds));
    game_state.set(GameState::Completed);
}

/// R restarts the level, Esc leaves for the main menu.
pub(crate) fn handle_playing_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<LevelSession>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        info!("Restarting level {}", session.index() + 1);
        session.restart();
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        game_state.set(GameState::MainMenu);
    }
}

/// R starts a new game, Esc quits.
pub(crate) fn handle_results_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        game_state.set(GameState::Playing);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
