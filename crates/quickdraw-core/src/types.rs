//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// Spawn slot on the play field, in pixels from the top-left corner.
/// x = left offset, y = top offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

/// A bandit that takes part in every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanditDef {
    pub name: String,
    /// Opaque sprite handle, resolved by the presentation layer.
    pub sprite: String,
}

/// One line of the in-game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    /// Round clock when the entry was written, in ms since the round started.
    pub at_ms: u64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Advance by one tick of `tick_ms` milliseconds.
    pub fn advance(&mut self, tick_ms: u64) {
        self.tick += 1;
        self.elapsed_ms += tick_ms;
    }
}

impl BanditDef {
    pub fn new(name: impl Into<String>, sprite: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprite: sprite.into(),
        }
    }
}

impl LogEntry {
    /// Round clock as `HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        let secs = self.at_ms / 1000;
        format!(
            "{:02}:{:02}:{:02}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60
        )
    }
}
