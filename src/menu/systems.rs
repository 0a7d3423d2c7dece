//! Menu domain: main menu and settings page UI.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;
use crate::menu::{MenuAction, MenuPage, MenuTheme};
use crate::settings::{Settings, SettingsPath};

/// Marker for the menu UI root
#[derive(Component, Debug)]
pub struct MenuUI;

#[derive(Component, Debug, Clone, Copy)]
pub struct MenuButton {
    pub action: MenuAction,
}

/// Which page is showing.
#[derive(Resource, Debug, Default)]
pub struct MenuPageState {
    pub page: MenuPage,
}

pub(crate) fn open_main_page(mut page: ResMut<MenuPageState>) {
    page.page = MenuPage::Main;
}

/// Rebuild the menu whenever the page or the settings it shows change.
pub(crate) fn rebuild_menu(
    mut commands: Commands,
    page: Res<MenuPageState>,
    settings: Res<Settings>,
    mut clear_color: ResMut<ClearColor>,
    existing: Query<Entity, With<MenuUI>>,
) {
    if !existing.is_empty() && !page.is_changed() && !settings.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let theme = MenuTheme::for_dark_theme(settings.dark_theme);
    clear_color.0 = theme.background;

    commands
        .spawn((
            MenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(theme.background),
        ))
        .with_children(|parent| match page.page {
            MenuPage::Main => {
                spawn_title(parent, "Escape the Castle", &theme);
                for action in [
                    MenuAction::Play,
                    MenuAction::OpenSettings,
                    MenuAction::ToggleTheme,
                    MenuAction::Quit,
                ] {
                    spawn_button(parent, action, 260.0, &theme);
                }
            }
            MenuPage::Settings => {
                spawn_title(parent, "Settings", &theme);
                spawn_toggle_row(
                    parent,
                    MenuAction::ToggleMusic,
                    settings.music_enabled,
                    &theme,
                );
                spawn_volume_row(
                    parent,
                    "Music volume",
                    settings.music_volume,
                    MenuAction::MusicVolume,
                    &theme,
                );
                spawn_toggle_row(
                    parent,
                    MenuAction::ToggleEffects,
                    settings.sound_effects_enabled,
                    &theme,
                );
                spawn_volume_row(
                    parent,
                    "Effects volume",
                    settings.sound_effects_volume,
                    MenuAction::EffectsVolume,
                    &theme,
                );
                spawn_button(parent, MenuAction::Back, 260.0, &theme);
            }
        });
}

fn spawn_title(parent: &mut ChildSpawnerCommands, title: &str, theme: &MenuTheme) {
    parent.spawn((
        Text::new(title),
        TextFont {
            font_size: 56.0,
            ..default()
        },
        TextColor(theme.text),
        Node {
            margin: UiRect::bottom(Val::Px(30.0)),
            ..default()
        },
    ));
}

fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    action: MenuAction,
    width: f32,
    theme: &MenuTheme,
) {
    parent
        .spawn((
            MenuButton { action },
            Button,
            Node {
                width: Val::Px(width),
                height: Val::Px(52.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(theme.border),
            BackgroundColor(theme.button),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(action.label()),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(theme.text),
            ));
        });
}

fn spawn_toggle_row(
    parent: &mut ChildSpawnerCommands,
    action: MenuAction,
    enabled: bool,
    theme: &MenuTheme,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|row| {
            spawn_button(row, action, 260.0, theme);
            row.spawn((
                Text::new(if enabled { "On" } else { "Off" }),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(theme.muted_text),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));
        });
}

fn spawn_volume_row(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    volume: f32,
    action: fn(i8) -> MenuAction,
    theme: &MenuTheme,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(format!("{}: {:.1}", label, volume)),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(theme.text),
                Node {
                    width: Val::Px(220.0),
                    ..default()
                },
            ));
            spawn_button(row, action(-1), 52.0, theme);
            spawn_button(row, action(1), 52.0, theme);
        });
}

pub(crate) fn handle_menu_buttons(
    mut buttons: Query<(&MenuButton, &Interaction, &mut BackgroundColor), Changed<Interaction>>,
    mut page: ResMut<MenuPageState>,
    mut settings: ResMut<Settings>,
    path: Res<SettingsPath>,
    mut game_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let theme = MenuTheme::for_dark_theme(settings.dark_theme);

    for (button, interaction, mut bg_color) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                apply_action(
                    button.action,
                    &mut page,
                    &mut settings,
                    &path,
                    &mut game_state,
                    &mut exit,
                );
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(theme.button_hovered);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(theme.button);
            }
        }
    }
}

/// Enter starts the game from the main page; Esc steps back or quits.
pub(crate) fn handle_menu_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut page: ResMut<MenuPageState>,
    mut settings: ResMut<Settings>,
    path: Res<SettingsPath>,
    mut game_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let action = if keyboard.just_pressed(KeyCode::Enter) && page.page == MenuPage::Main {
        MenuAction::Play
    } else if keyboard.just_pressed(KeyCode::Escape) {
        match page.page {
            MenuPage::Main => MenuAction::Quit,
            MenuPage::Settings => MenuAction::Back,
        }
    } else {
        return;
    };

    apply_action(
        action,
        &mut page,
        &mut settings,
        &path,
        &mut game_state,
        &mut exit,
    );
}

fn apply_action(
    action: MenuAction,
    page: &mut MenuPageState,
    settings: &mut Settings,
    path: &SettingsPath,
    game_state: &mut NextState<GameState>,
    exit: &mut MessageWriter<AppExit>,
) {
    if let Some(change) = action.settings_change(settings) {
        if let Err(e) = settings.update(change, &path.0) {
            error!("{}", e);
        }
        return;
    }

    match action {
        MenuAction::Play => game_state.set(GameState::Playing),
        MenuAction::OpenSettings => page.page = MenuPage::Settings,
        MenuAction::Back => page.page = MenuPage::Main,
        MenuAction::Quit => {
            info!("Quit from main menu");
            exit.write(AppExit::Success);
        }
        _ => {}
    }
}

pub(crate) fn cleanup_menu(mut commands: Commands, query: Query<Entity, With<MenuUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
