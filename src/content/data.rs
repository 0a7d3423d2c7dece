//! Data definitions for the RON level file.
//!
//! These structs mirror the structure in assets/data/levels.ron and are used
//! for deserialization. Runtime levels are built from them by the level domain.

use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Horizontal distance between neighbouring tiles in a run.
pub const TILE_STRIDE: f32 = 64.0;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub spawn: (f32, f32),
    /// Solid fill behind the level, as 8-bit RGB.
    pub background: (u8, u8, u8),
    pub platforms: Vec<PlatformDef>,
    pub ladders: Vec<LadderDef>,
    pub keys: Vec<(f32, f32)>,
    pub doors: Vec<(f32, f32)>,
}

/// A row of `tiles` solid tiles starting at (`x`, `y`), stepping right by
/// [`TILE_STRIDE`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub tiles: u32,
    pub tile_size: (f32, f32),
}

/// A column of ladder tiles centered on `x`, from `y_start` up to (but not
/// including) `y_end`, stepping by [`TILE_STRIDE`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LadderDef {
    pub x: f32,
    pub y_start: f32,
    pub y_end: f32,
}

impl LadderDef {
    /// Center heights of every tile in the column.
    pub fn tile_centers(&self) -> Vec<f32> {
        let mut centers = Vec::new();
        let mut y = self.y_start;
        while y < self.y_end {
            centers.push(y);
            y += TILE_STRIDE;
        }
        centers
    }
}

impl LevelDef {
    /// Minimal playable level used when the level file cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            id: "level_fallback".to_string(),
            name: "Courtyard".to_string(),
            spawn: (128.0, 256.0),
            background: (135, 206, 235),
            platforms: vec![PlatformDef {
                x: 0.0,
                y: 64.0,
                tiles: 32,
                tile_size: (64.0, 32.0),
            }],
            ladders: Vec::new(),
            keys: Vec::new(),
            doors: vec![(1800.0, 144.0)],
        }
    }
}
