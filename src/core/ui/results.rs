//! Core domain: results screen shown after the last level.

use bevy::prelude::*;

use crate::core::RunClock;

/// Marker for results screen UI root
#[derive(Component, Debug)]
pub struct ResultsScreenUI;

pub(crate) fn spawn_results_screen(mut commands: Commands, clock: Res<RunClock>) {
    let bg_color = Color::srgba(0.0, 0.0, 0.0, 0.98);
    let title_color = Color::srgb(1.0, 0.84, 0.0);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.75, 0.75, 0.75);

    commands
        .spawn((
            ResultsScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Time: {}", clock.display())),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Congratulations!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press ESC to quit"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Or R to start a new game"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_results_screen(
    mut commands: Commands,
    query: Query<Entity, With<ResultsScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
