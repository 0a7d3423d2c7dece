mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod level;
mod menu;
mod movement;
mod physics;
mod settings;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Escape the Castle".to_string(),
            resolution: (1280, 720).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        settings::SettingsPlugin,
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        effects::EffectsPlugin,
        camera::CameraPlugin,
        menu::MenuPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
