//! Core domain: run clock and level banner.

use bevy::prelude::*;

/// Seconds the "Level N" banner stays up after a level loads.
pub const BANNER_DURATION: f32 = 2.0;

/// Elapsed play time for the current run.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct RunClock {
    pub elapsed: f32,
    /// Final time in whole seconds, set once the game is completed.
    pub final_seconds: Option<u32>,
}

impl RunClock {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tick(&mut self, dt: f32) {
        if self.final_seconds.is_none() {
            self.elapsed += dt;
        }
    }

    pub fn finish(&mut self) -> u32 {
        let seconds = self.whole_seconds();
        self.final_seconds = Some(seconds);
        seconds
    }

    pub fn whole_seconds(&self) -> u32 {
        self.elapsed.max(0.0) as u32
    }

    /// Running time, or the final time once finished, as `MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.final_seconds.unwrap_or_else(|| self.whole_seconds()))
    }
}

pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Banner announcing the level just entered.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct LevelBanner {
    pub text: String,
    pub remaining: f32,
    /// Level generation the banner was raised for.
    pub generation: Option<u64>,
}

impl LevelBanner {
    pub fn show(&mut self, level_number: usize, generation: u64) {
        self.text = format!("Level {}", level_number);
        self.remaining = BANNER_DURATION;
        self.generation = Some(generation);
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }
}
