//! Player commands sent from the presentation layer to the engine.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Submit the setup form and start a round. The difficulty is a free-form
    /// label; unknown labels play as normal.
    Start {
        difficulty: String,
        player_name: String,
    },
    /// Click on a rendered bandit.
    Hit { target_id: u32 },
    /// Click at a play-field coordinate; resolves to the bandit under the cursor, if any.
    ShootAt { x: f64, y: f64 },
    /// Refill the cylinder.
    Reload,
    /// Abandon the current round or leave the score screen, back to setup.
    Reset,
}
