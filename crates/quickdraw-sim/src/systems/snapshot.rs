//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use std::collections::VecDeque;

use hecs::World;

use quickdraw_core::components::Bandit;
use quickdraw_core::enums::GamePhase;
use quickdraw_core::events::GameEvent;
use quickdraw_core::state::{BanditView, GameStateSnapshot, RoundSummary};
use quickdraw_core::types::{LogEntry, SimTime};

use crate::ammo::Cylinder;
use crate::engine::RoundState;
use crate::pool::PositionPool;
use crate::target::Target;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    round: Option<&RoundState>,
    cylinder: &Cylinder,
    pool: &PositionPool,
    log: &VecDeque<LogEntry>,
    events: Vec<GameEvent>,
    summary: Option<RoundSummary>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        difficulty: round.map(|r| r.difficulty),
        player_name: round.map(|r| r.player_name.clone()).unwrap_or_default(),
        player_lives: round.map(|r| r.player_lives_remaining).unwrap_or(0),
        ammo: cylinder.view(),
        bandits: build_bandits(world),
        available_positions: pool.len(),
        log: log.iter().cloned().collect(),
        events,
        summary,
    }
}

/// Build the bandit overview from all entities with a Target.
pub fn build_bandits(world: &World) -> Vec<BanditView> {
    let mut bandits: Vec<BanditView> = world
        .query::<(&Bandit, &Target)>()
        .iter()
        .map(|(_, (bandit, target))| BanditView {
            id: target.id(),
            name: bandit.name.clone(),
            sprite: bandit.sprite.clone(),
            remaining_lives: target.remaining_lives(),
            max_lives: target.max_lives(),
            state: target.state(),
            position: target.position(),
        })
        .collect();

    bandits.sort_by_key(|b| b.id);
    bandits
}
