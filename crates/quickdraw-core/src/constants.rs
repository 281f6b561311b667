//! Game constants and tuning parameters.

use crate::types::{BanditDef, Position};

/// Real-time tick rate of the host game loop (Hz).
pub const TICK_RATE: u32 = 30;

/// Milliseconds per tick at the default tick rate.
pub const DEFAULT_TICK_MS: u64 = 1000 / TICK_RATE as u64;

// --- Play field ---

/// Number of preset spawn slots.
pub const POSITION_COUNT: usize = 10;

/// The fixed spawn slots, top row first.
pub const BANDIT_POSITIONS: [Position; POSITION_COUNT] = [
    Position::new(155.0, 300.0),
    Position::new(260.0, 300.0),
    Position::new(476.0, 217.0),
    Position::new(676.0, 300.0),
    Position::new(776.0, 300.0),
    Position::new(155.0, 490.0),
    Position::new(260.0, 490.0),
    Position::new(476.0, 490.0),
    Position::new(676.0, 490.0),
    Position::new(776.0, 490.0),
];

/// Rendered bandit sprite size in pixels. Sprites are anchored at their
/// position's top-left corner.
pub const SPRITE_WIDTH: f64 = 80.0;
pub const SPRITE_HEIGHT: f64 = 120.0;

// --- Bandits ---

/// Default roster: (name, sprite).
pub const DEFAULT_ROSTER: [(&str, &str); 3] = [
    ("Jack", "./img/sprites/jack.png"),
    ("Joe", "./img/sprites/joe.png"),
    ("John", "./img/sprites/john.png"),
];

// --- Gun ---

/// Rounds held by a full cylinder.
pub const CYLINDER_CAPACITY: u32 = 4;

// --- Scoring ---

/// Points per whole second survived.
pub const SCORE_PER_SECOND: u32 = 10;

// --- Log ---

/// Maximum number of log entries retained per round.
pub const LOG_CAPACITY: usize = 100;

/// Build the default bandit roster.
pub fn default_roster() -> Vec<BanditDef> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, sprite)| BanditDef::new(*name, *sprite))
        .collect()
}
