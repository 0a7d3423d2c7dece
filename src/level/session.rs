//! Level domain: ordered level progression for one play session.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::level::Level;

/// Result of walking through an unlocked door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    Next(usize),
    Completed,
}

/// The level list and the instance currently being played.
///
/// `generation` bumps on every (re)load so the player rig and level visuals
/// can tell a fresh instance from in-place key removals.
#[derive(Resource, Debug)]
pub struct LevelSession {
    defs: Vec<LevelDef>,
    index: usize,
    current: Level,
    generation: u64,
    completed: bool,
}

impl LevelSession {
    pub fn new(defs: Vec<LevelDef>) -> Self {
        let defs = if defs.is_empty() {
            vec![LevelDef::fallback()]
        } else {
            defs
        };
        let current = Level::from_def(&defs[0]);

        Self {
            defs,
            index: 0,
            current,
            generation: 0,
            completed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.defs.len()
    }

    pub fn current(&self) -> &Level {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Level {
        &mut self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Load level `index` fresh. Out-of-range indices leave the session on the
    /// current level and return false.
    pub fn switch_to(&mut self, index: usize) -> bool {
        let Some(def) = self.defs.get(index) else {
            warn!(
                "Ignoring switch to level {} ({} levels loaded)",
                index,
                self.defs.len()
            );
            return false;
        };

        self.current = Level::from_def(def);
        self.index = index;
        self.generation += 1;
        self.completed = false;
        info!("Entering level {} '{}'", index + 1, self.current.name);
        true
    }

    /// Reload the current level, restoring its keys.
    pub fn restart(&mut self) {
        self.switch_to(self.index);
    }

    /// Start a new game from the first level.
    pub fn reset(&mut self) {
        self.switch_to(0);
    }

    /// Move to the next level, or mark the game complete after the last one.
    pub fn advance(&mut self) -> LevelAdvance {
        let next = self.index + 1;
        if next < self.defs.len() && self.switch_to(next) {
            LevelAdvance::Next(next)
        } else {
            self.completed = true;
            info!("Final level cleared");
            LevelAdvance::Completed
        }
    }

    /// Jump `offset` levels forward or back, wrapping around the list.
    pub fn cycle(&mut self, offset: isize) -> usize {
        let count = self.defs.len() as isize;
        let target = (self.index as isize + offset).rem_euclid(count) as usize;
        self.switch_to(target);
        target
    }
}
