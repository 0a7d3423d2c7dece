//! UI domain: run timer HUD element.

use bevy::prelude::*;

use crate::core::RunClock;

pub(crate) const HUD_TOP_PADDING: f32 = 24.0;

/// Marker for the timer HUD container
#[derive(Component)]
pub struct TimerHudUI;

/// Marker for the timer text
#[derive(Component)]
pub struct TimerText;

pub(crate) fn spawn_timer_hud(mut commands: Commands) {
    commands
        .spawn((
            TimerHudUI,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(HUD_TOP_PADDING),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                TimerText,
                Text::new("Time: 00:00"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn update_timer_hud(
    clock: Res<RunClock>,
    mut query: Query<&mut Text, With<TimerText>>,
) {
    if clock.is_changed() {
        for mut text in &mut query {
            **text = format!("Time: {}", clock.display());
        }
    }
}

pub(crate) fn cleanup_timer_hud(mut commands: Commands, query: Query<Entity, With<TimerHudUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
