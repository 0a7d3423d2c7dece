//! Physics domain: static level rectangles tested through avian colliders.

use std::fmt;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::physics::{CONTACT_EPSILON, GameLayer};

/// A static level rectangle on one [`GameLayer`].
///
/// The collider is the rectangle grown by the player's size (less the
/// contact epsilon on each side), so "player box overlaps rectangle"
/// becomes a point query on the player's center.
#[derive(Clone)]
pub struct Obstacle {
    bounds: Rect,
    layers: CollisionLayers,
    reach: Collider,
}

impl Obstacle {
    pub fn new(bounds: Rect, layer: GameLayer, player_size: Vec2) -> Self {
        let reach =
            (bounds.size() + player_size - Vec2::splat(2.0 * CONTACT_EPSILON)).max(Vec2::ZERO);
        Self {
            bounds,
            layers: CollisionLayers::new(layer, [GameLayer::Player]),
            reach: Collider::rectangle(reach.x, reach.y),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether this obstacle is visible to a player query filtered by `mask`.
    pub fn in_mask(&self, mask: impl Into<LayerMask>) -> bool {
        CollisionLayers::new(GameLayer::Player, mask).interacts_with(self.layers)
    }

    /// Whether a player box centered at `center` overlaps the rectangle by
    /// more than the contact epsilon on both axes.
    pub fn overlaps(&self, center: Vec2) -> bool {
        self.reach.contains_point(self.bounds.center(), Rotation::default(), center)
    }
}

impl fmt::Debug for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obstacle")
            .field("bounds", &self.bounds)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}
