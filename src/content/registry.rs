//! ContentRegistry resource providing ordered access to loaded levels.

use bevy::prelude::*;

use super::data::*;

/// Central registry for all loaded game content.
/// Levels keep the order they were authored in; that order is the play order.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub levels: Vec<LevelDef>,
}

impl ContentRegistry {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    /// Look up a level by id.
    pub fn level(&self, id: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let keys: usize = self.levels.iter().map(|level| level.keys.len()).sum();
        let ladders: usize = self.levels.iter().map(|level| level.ladders.len()).sum();
        format!(
            "ContentRegistry loaded:\n\
             - Levels: {}\n\
             - Keys: {}\n\
             - Ladders: {}",
            self.levels.len(),
            keys,
            ladders,
        )
    }
}
