//! UI domain: "Level N" banner shown when a level loads.

use bevy::prelude::*;

use crate::core::LevelBanner;

/// Marker for the banner container
#[derive(Component)]
pub struct LevelBannerUI;

/// Marker for the banner title text
#[derive(Component)]
pub struct LevelBannerText;

pub(crate) fn spawn_level_banner(mut commands: Commands) {
    commands
        .spawn((
            LevelBannerUI,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            Visibility::Hidden,
            ZIndex(50),
        ))
        .with_children(|parent| {
            parent.spawn((
                LevelBannerText,
                Text::new(""),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                Text::new("Collect all the keys and find the door"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.83, 0.83, 0.83)),
            ));
        });
}

pub(crate) fn update_level_banner(
    banner: Res<LevelBanner>,
    mut containers: Query<&mut Visibility, With<LevelBannerUI>>,
    mut texts: Query<&mut Text, With<LevelBannerText>>,
) {
    if !banner.is_changed() {
        return;
    }

    let visibility = if banner.is_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut container in &mut containers {
        *container = visibility;
    }
    for mut text in &mut texts {
        if **text != banner.text {
            **text = banner.text.clone();
        }
    }
}

pub(crate) fn cleanup_level_banner(
    mut commands: Commands,
    query: Query<Entity, With<LevelBannerUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
