//! Game state snapshot: the complete visible state handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{LogEntry, Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: Option<Difficulty>,
    pub player_name: String,
    pub player_lives: u32,
    pub ammo: AmmoView,
    /// Bandit overview, ordered by id.
    pub bandits: Vec<BanditView>,
    /// Spawn slots not currently held by an on-screen bandit.
    pub available_positions: usize,
    /// Game log, newest first.
    pub log: Vec<LogEntry>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
    /// Set once the round has ended.
    pub summary: Option<RoundSummary>,
}

/// Cylinder status for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoView {
    pub remaining: u32,
    pub capacity: u32,
}

/// One row of the bandit overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanditView {
    pub id: u32,
    pub name: String,
    pub sprite: String,
    pub remaining_lives: u32,
    pub max_lives: u32,
    pub state: TargetState,
    /// Present only while on screen.
    pub position: Option<Position>,
}

/// Final outcome of a round, shown on the score screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub result: RoundResult,
    pub final_score: u32,
    pub ended_at_ms: u64,
}

impl GameStateSnapshot {
    /// Number of bandits currently on screen.
    pub fn on_screen_count(&self) -> usize {
        self.bandits
            .iter()
            .filter(|b| b.state == TargetState::OnScreen)
            .count()
    }
}

impl BanditView {
    /// Overview label: remaining hit points, or "DEAD".
    pub fn health_label(&self) -> String {
        match self.state {
            TargetState::Dead => "DEAD".to_string(),
            _ => format!("{} HP", self.remaining_lives),
        }
    }
}
