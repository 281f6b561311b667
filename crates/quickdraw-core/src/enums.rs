//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Difficulty preset selected on the setup screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse a setup-form label. Anything unrecognised falls back to `Normal`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

/// Lifecycle state of a bandit target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetState {
    /// Not on screen: not yet spawned, or despawned and waiting to respawn.
    #[default]
    Inactive,
    /// Visible and clickable, despawn timer armed.
    OnScreen,
    /// Out of lives. Terminal.
    Dead,
}

/// Result of a shot at an on-screen target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// The cylinder was empty; nothing happened to the target.
    NoAmmo,
    /// Target lost a life but has lives left.
    Wounded,
    /// Target lost its last life.
    Kill,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Loss,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Setup screen: name and difficulty not yet submitted.
    #[default]
    Setup,
    /// Round in progress.
    Active,
    /// Round over, final score on display.
    Ended,
}

/// Audio cue an adapter should play in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Gunshot,
    EmptyClick,
    Reload,
    BackgroundMusicStart,
    BackgroundMusicStop,
    GameOver,
    Congratulations,
}
