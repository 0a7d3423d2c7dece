//! Movement domain: components for the player character.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by a last horizontal direction of -1 or +1.
    pub fn from_direction(direction: i8) -> Self {
        if direction < 0 { Facing::Left } else { Facing::Right }
    }

    pub fn is_right(self) -> bool {
        self == Facing::Right
    }
}
