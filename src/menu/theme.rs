//! Menu domain: light and dark color themes.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTheme {
    pub background: Color,
    pub button: Color,
    pub button_hovered: Color,
    pub border: Color,
    pub text: Color,
    pub muted_text: Color,
}

impl MenuTheme {
    pub const LIGHT: MenuTheme = MenuTheme {
        background: Color::srgb(0.53, 0.81, 0.92),
        button: Color::srgb(0.95, 0.93, 0.88),
        button_hovered: Color::srgb(1.0, 0.98, 0.92),
        border: Color::srgb(0.35, 0.3, 0.25),
        text: Color::srgb(0.12, 0.12, 0.15),
        muted_text: Color::srgb(0.3, 0.3, 0.35),
    };

    pub const DARK: MenuTheme = MenuTheme {
        background: Color::srgb(0.06, 0.06, 0.1),
        button: Color::srgb(0.12, 0.12, 0.18),
        button_hovered: Color::srgb(0.18, 0.18, 0.25),
        border: Color::srgb(0.7, 0.7, 0.8),
        text: Color::srgb(0.9, 0.9, 0.9),
        muted_text: Color::srgb(0.6, 0.6, 0.7),
    };

    pub fn for_dark_theme(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}
