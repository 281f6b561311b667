//! Events emitted by the engine for rendering and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{LogEntry, Position};

/// Everything the presentation layer needs to mirror engine state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round began.
    RoundStarted {
        difficulty: Difficulty,
        player_name: String,
    },
    /// A bandit appeared at a spawn slot.
    TargetSpawned {
        target_id: u32,
        name: String,
        position: Position,
    },
    /// A bandit left the screen (escape or hit).
    TargetRemoved { target_id: u32 },
    /// A shot was taken at a bandit.
    Hit {
        target_id: u32,
        outcome: HitOutcome,
        remaining_lives: u32,
    },
    /// A bandit's despawn timer ran out before it was shot.
    Escape { target_id: u32, name: String },
    AmmoChanged { remaining: u32, capacity: u32 },
    Reloaded,
    LivesChanged { lives: u32 },
    Log(LogEntry),
    RoundEnded { result: RoundResult, final_score: u32 },
}

impl GameEvent {
    /// Audio cues to play in response to this event, in order.
    pub fn sound_cues(&self) -> &'static [SoundCue] {
        match self {
            GameEvent::RoundStarted { .. } => &[SoundCue::BackgroundMusicStart],
            GameEvent::Hit {
                outcome: HitOutcome::NoAmmo,
                ..
            } => &[SoundCue::EmptyClick],
            GameEvent::Hit { .. } => &[SoundCue::Gunshot],
            GameEvent::Reloaded => &[SoundCue::Reload],
            GameEvent::RoundEnded {
                result: RoundResult::Win,
                ..
            } => &[SoundCue::BackgroundMusicStop, SoundCue::Congratulations],
            GameEvent::RoundEnded {
                result: RoundResult::Loss,
                ..
            } => &[SoundCue::BackgroundMusicStop, SoundCue::GameOver],
            _ => &[],
        }
    }
}
