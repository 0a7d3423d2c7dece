//! Validation for level definitions.

use std::collections::HashSet;

use super::data::*;
use crate::level::WorldBounds;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level '{}' has invalid '{}': {}",
            self.level_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a point lies inside the world
macro_rules! check_in_world {
    ($errors:expr, $bounds:expr, $level_id:expr, $field:expr, $point:expr) => {
        let (x, y) = $point;
        if !$bounds.contains(bevy::math::Vec2::new(x, y)) {
            $errors.push(ValidationError {
                level_id: $level_id.to_string(),
                field: $field,
                message: format!("({}, {}) lies outside the world", x, y),
            });
        }
    };
}

/// Validate every level against the world bounds.
/// Returns a list of validation errors, empty if all levels are usable.
pub fn validate_levels(levels: &[LevelDef], bounds: &WorldBounds) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for level in levels {
        if !seen_ids.insert(level.id.as_str()) {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "id",
                message: "duplicate level id".to_string(),
            });
        }

        check_in_world!(errors, bounds, level.id, "spawn", level.spawn);

        if level.doors.is_empty() {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "doors",
                message: "level has no exit door".to_string(),
            });
        }
        for door in &level.doors {
            check_in_world!(errors, bounds, level.id, "doors", *door);
        }
        for key in &level.keys {
            check_in_world!(errors, bounds, level.id, "keys", *key);
        }

        for platform in &level.platforms {
            let (w, h) = platform.tile_size;
            if platform.tiles == 0 || w <= 0.0 || h <= 0.0 {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "platforms",
                    message: format!(
                        "platform at ({}, {}) has no area ({} tiles of {}x{})",
                        platform.x, platform.y, platform.tiles, w, h
                    ),
                });
            }
        }

        for ladder in &level.ladders {
            if ladder.y_start >= ladder.y_end {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "ladders",
                    message: format!(
                        "ladder at x={} runs from {} to {}",
                        ladder.x, ladder.y_start, ladder.y_end
                    ),
                });
            }
        }
    }

    errors
}
