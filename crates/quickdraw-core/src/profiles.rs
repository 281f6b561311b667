//! Difficulty profiles.
//!
//! Consolidates the per-difficulty tunables for a round.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// Tunable parameters for one round. Immutable once the round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Escapes the player can absorb before losing.
    pub player_lives: u32,
    /// Hits needed to kill each bandit.
    pub bandit_lives: u32,
    /// Period of the spawn scheduler (ms).
    pub spawn_interval_ms: u64,
    /// How long a bandit stays on screen before escaping (ms).
    pub despawn_timeout_ms: u64,
}

impl DifficultyProfile {
    /// Get the profile for a given difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => DifficultyProfile {
                player_lives: 5,
                bandit_lives: 2,
                spawn_interval_ms: 3000,
                despawn_timeout_ms: 4000,
            },
            Difficulty::Normal => DifficultyProfile {
                player_lives: 4,
                bandit_lives: 2,
                spawn_interval_ms: 2000,
                despawn_timeout_ms: 3000,
            },
            Difficulty::Hard => DifficultyProfile {
                player_lives: 3,
                bandit_lives: 3,
                spawn_interval_ms: 1500,
                despawn_timeout_ms: 2000,
            },
        }
    }
}

/// Resolve a setup-form label to its profile. Unknown labels get the normal profile.
pub fn resolve(label: &str) -> DifficultyProfile {
    DifficultyProfile::for_difficulty(Difficulty::from_label(label))
}
