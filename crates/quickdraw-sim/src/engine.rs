//! Round controller: the core of the game.
//!
//! `RoundController` owns the hecs world holding the bandits, the spawn slot
//! pool, the cylinder and every pending timer. It processes player commands,
//! fires due timers in simulation time, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quickdraw_core::commands::PlayerCommand;
use quickdraw_core::components::Bandit;
use quickdraw_core::constants::{
    default_roster, BANDIT_POSITIONS, CYLINDER_CAPACITY, DEFAULT_TICK_MS, LOG_CAPACITY,
};
use quickdraw_core::enums::{Difficulty, GamePhase, HitOutcome, RoundResult, TargetState};
use quickdraw_core::error::CommandError;
use quickdraw_core::events::GameEvent;
use quickdraw_core::profiles::DifficultyProfile;
use quickdraw_core::scoring::final_score;
use quickdraw_core::state::{GameStateSnapshot, RoundSummary};
use quickdraw_core::types::{BanditDef, LogEntry, Position, SimTime};

use crate::ammo::Cylinder;
use crate::hit_test;
use crate::pool::PositionPool;
use crate::systems;
use crate::systems::spawn_scheduler::{SpawnScheduler, SpawnTick};
use crate::target::Target;
use crate::timers::{TimerHandle, TimerKind, TimerQueue};
use crate::world_setup;

/// Configuration for a new controller.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawns.
    pub seed: u64,
    /// Simulation milliseconds per `tick()`.
    pub tick_ms: u64,
    /// Bandits taking part in every round.
    pub roster: Vec<BanditDef>,
    /// Rounds in a full cylinder.
    pub cylinder_capacity: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_ms: DEFAULT_TICK_MS,
            roster: default_roster(),
            cylinder_capacity: CYLINDER_CAPACITY,
        }
    }
}

/// Everything needed to start a round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSetup {
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    pub player_name: String,
}

impl RoundSetup {
    /// Setup-form submission: unknown labels play as normal.
    pub fn from_label(label: &str, player_name: impl Into<String>) -> Self {
        let difficulty = Difficulty::from_label(label);
        Self {
            difficulty,
            profile: DifficultyProfile::for_difficulty(difficulty),
            player_name: player_name.into(),
        }
    }
}

/// Mutable state of the round in progress (or just finished).
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    pub player_name: String,
    pub player_lives_remaining: u32,
    pub started_at_ms: u64,
    pub is_active: bool,
}

/// The round controller. Owns the ECS world and all game state.
pub struct RoundController {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tick_ms: u64,
    roster: Vec<BanditDef>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    pool: PositionPool,
    cylinder: Cylinder,
    timers: TimerQueue,
    scheduler: SpawnScheduler,
    round: Option<RoundState>,
    summary: Option<RoundSummary>,
    /// Newest first.
    log: VecDeque<LogEntry>,
}

impl RoundController {
    /// Create a new controller with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            tick_ms: config.tick_ms.max(1),
            roster: config.roster,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            pool: PositionPool::with_presets(),
            cylinder: Cylinder::full(config.cylinder_capacity),
            timers: TimerQueue::new(),
            scheduler: SpawnScheduler::default(),
            round: None,
            summary: None,
            log: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, then advance simulation time by one tick,
    /// firing every timer that falls due. Returns the resulting snapshot
    /// carrying the events emitted since the previous tick.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let start = self.time;
            self.run_timers_until(start.elapsed_ms + self.tick_ms);
            // Timers move the clock to their due times; the tick still ends on its boundary.
            self.time = start;
            self.time.advance(self.tick_ms);
        }

        debug_assert!(self.invariants_hold(), "round invariants violated");

        let events = self.drain_events();
        self.build_snapshot(events)
    }

    /// Current state without consuming pending events. Events accumulate
    /// until `tick()` or `drain_events()` takes them.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// Take the events emitted since the last tick or drain, for adapters
    /// that drive the controller through `handle_command` alone.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a command immediately, at the current simulation time.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::Start {
                difficulty,
                player_name,
            } => self.start(RoundSetup::from_label(&difficulty, player_name)),
            PlayerCommand::Hit { target_id } => self.hit(target_id).map(|_| ()),
            PlayerCommand::ShootAt { x, y } => self.shoot_at(x, y).map(|_| ()),
            PlayerCommand::Reload => self.reload(),
            PlayerCommand::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Start a round. From the score screen this is "play again" and
    /// implies a reset.
    pub fn start(&mut self, setup: RoundSetup) -> Result<(), CommandError> {
        if setup.player_name.trim().is_empty() {
            return Err(CommandError::BlankPlayerName);
        }
        match self.phase {
            GamePhase::Active => return Err(CommandError::RoundAlreadyActive),
            GamePhase::Ended => self.reset(),
            GamePhase::Setup => {}
        }

        let now = self.now();
        let profile = setup.profile;

        self.timers.invalidate_all();
        self.pool.reset(&BANDIT_POSITIONS);
        world_setup::setup_round(&mut self.world, &self.roster, profile.bandit_lives);
        self.cylinder.reload();
        self.summary = None;
        self.log.clear();

        self.scheduler = SpawnScheduler::new(profile.spawn_interval_ms);
        self.scheduler.start(&mut self.timers, now);

        tracing::info!(
            player = %setup.player_name,
            difficulty = setup.difficulty.label(),
            bandits = self.roster.len(),
            "round started"
        );

        self.events.push(GameEvent::RoundStarted {
            difficulty: setup.difficulty,
            player_name: setup.player_name.clone(),
        });
        self.events.push(GameEvent::LivesChanged {
            lives: profile.player_lives,
        });
        self.push_ammo_changed();

        self.round = Some(RoundState {
            difficulty: setup.difficulty,
            profile,
            player_name: setup.player_name,
            player_lives_remaining: profile.player_lives,
            started_at_ms: now,
            is_active: true,
        });
        self.phase = GamePhase::Active;
        self.push_log("Game started!".to_string());
        Ok(())
    }

    /// Click on a bandit by id. `Ok(None)` when it is not on screen.
    pub fn hit(&mut self, target_id: u32) -> Result<Option<HitOutcome>, CommandError> {
        self.require_active()?;

        let mut found = None;
        for (_entity, (bandit, target)) in self.world.query_mut::<(&Bandit, &mut Target)>() {
            if target.id() == target_id {
                let outcome =
                    target.register_hit(&mut self.cylinder, &mut self.pool, &mut self.timers);
                found = Some((bandit.name.clone(), outcome, target.remaining_lives()));
                break;
            }
        }

        let Some((name, outcome, remaining_lives)) = found else {
            return Err(CommandError::UnknownTarget { target_id });
        };
        if let Some(outcome) = outcome {
            self.on_hit(target_id, &name, outcome, remaining_lives);
        }
        Ok(outcome)
    }

    /// Click at a play-field coordinate. Clicking the background does nothing
    /// and costs no ammunition.
    pub fn shoot_at(&mut self, x: f64, y: f64) -> Result<Option<HitOutcome>, CommandError> {
        self.require_active()?;

        // Most recently spawned first: it is drawn on top.
        let mut candidates: Vec<(TimerHandle, u32, Position)> = self
            .world
            .query::<&Target>()
            .iter()
            .filter_map(|(_, target)| {
                Some((target.despawn_timer()?, target.id(), target.position()?))
            })
            .collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0));
        let stacked: Vec<_> = candidates.into_iter().map(|(_, id, pos)| (id, pos)).collect();

        match hit_test::pick(&stacked, DVec2::new(x, y)) {
            Some(target_id) => self.hit(target_id),
            None => Ok(None),
        }
    }

    /// Refill the cylinder. Allowed at any point of an active round.
    pub fn reload(&mut self) -> Result<(), CommandError> {
        self.require_active()?;
        self.cylinder.reload();
        self.events.push(GameEvent::Reloaded);
        self.push_ammo_changed();
        self.push_log("You reloaded your gun!".to_string());
        Ok(())
    }

    /// Abandon whatever is running and return to the setup screen.
    pub fn reset(&mut self) {
        self.scheduler.stop(&mut self.timers);
        self.timers.invalidate_all();

        let on_screen: Vec<u32> = self
            .world
            .query::<&Target>()
            .iter()
            .filter(|(_, target)| target.is_on_screen())
            .map(|(_, target)| target.id())
            .collect();
        for target_id in on_screen {
            self.events.push(GameEvent::TargetRemoved { target_id });
        }

        self.world.clear();
        self.pool.reset(&BANDIT_POSITIONS);
        self.cylinder.reload();
        self.push_ammo_changed();
        self.round = None;
        self.summary = None;
        self.log.clear();
        self.phase = GamePhase::Setup;
        tracing::debug!("round reset");
    }

    /// A bandit escaped: the player loses a life.
    fn on_escape(&mut self, target_id: u32, name: String) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.player_lives_remaining = round.player_lives_remaining.saturating_sub(1);
        let lives = round.player_lives_remaining;

        tracing::debug!(target_id, lives, "bandit escaped");
        self.events.push(GameEvent::TargetRemoved { target_id });
        self.events.push(GameEvent::Escape {
            target_id,
            name: name.clone(),
        });
        self.events.push(GameEvent::LivesChanged { lives });
        self.push_log(format!("{name} escaped! -1 life."));

        if lives == 0 {
            self.end(RoundResult::Loss);
        }
    }

    fn on_hit(&mut self, target_id: u32, name: &str, outcome: HitOutcome, remaining_lives: u32) {
        tracing::debug!(target_id, ?outcome, remaining_lives, "shot resolved");

        if outcome != HitOutcome::NoAmmo {
            self.push_ammo_changed();
            self.events.push(GameEvent::TargetRemoved { target_id });
        }
        self.events.push(GameEvent::Hit {
            target_id,
            outcome,
            remaining_lives,
        });

        match outcome {
            HitOutcome::NoAmmo => self.push_log("No bullets left! Reload your gun.".to_string()),
            HitOutcome::Wounded => {
                self.push_log(format!("You hit {name}! {remaining_lives} lives left."))
            }
            HitOutcome::Kill => {
                self.push_log(format!("You defeated {name}!"));
                if self.all_dead() {
                    self.end(RoundResult::Win);
                }
            }
        }
    }

    /// Finish the round: stop every timer, score it, announce the result.
    fn end(&mut self, result: RoundResult) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.scheduler.stop(&mut self.timers);
        self.timers.invalidate_all();

        let now = self.now();
        let started_at_ms = self.round.as_ref().map_or(now, |r| r.started_at_ms);
        let score = final_score(started_at_ms, now);
        if let Some(round) = self.round.as_mut() {
            round.is_active = false;
        }
        self.phase = GamePhase::Ended;
        self.summary = Some(RoundSummary {
            result,
            final_score: score,
            ended_at_ms: now,
        });

        tracing::info!(?result, score, "round ended");
        self.push_log(
            match result {
                RoundResult::Win => "You won the game!",
                RoundResult::Loss => "Game over! You lost!",
            }
            .to_string(),
        );
        self.events.push(GameEvent::RoundEnded {
            result,
            final_score: score,
        });
    }

    /// Fire due timers in due-time order, with the clock set to each one's due time.
    fn run_timers_until(&mut self, until_ms: u64) {
        while self.phase == GamePhase::Active {
            let Some((handle, kind)) = self.timers.pop_due(until_ms) else {
                break;
            };
            self.time.elapsed_ms = self.time.elapsed_ms.max(handle.due_ms);
            match kind {
                TimerKind::SpawnTick => self.on_spawn_tick(handle),
                TimerKind::Despawn { target_id } => self.on_despawn_timeout(target_id, handle),
            }
        }
    }

    fn on_spawn_tick(&mut self, handle: TimerHandle) {
        if !self.scheduler.owns(handle) {
            return;
        }
        self.scheduler.rearm(&mut self.timers, handle);

        let Some(despawn_timeout_ms) = self.round.as_ref().map(|r| r.profile.despawn_timeout_ms)
        else {
            return;
        };
        let despawn_at_ms = self.now() + despawn_timeout_ms;

        match systems::spawn_scheduler::run(
            &mut self.world,
            &mut self.rng,
            &mut self.pool,
            &mut self.timers,
            despawn_at_ms,
        ) {
            SpawnTick::Spawned {
                target_id,
                position,
            } => {
                let name = self.bandit_name(target_id);
                tracing::debug!(target_id, x = position.x, y = position.y, "bandit spawned");
                self.events.push(GameEvent::TargetSpawned {
                    target_id,
                    name,
                    position,
                });
            }
            SpawnTick::Idle => {}
            SpawnTick::AllDead => self.end(RoundResult::Win),
        }
    }

    fn on_despawn_timeout(&mut self, target_id: u32, handle: TimerHandle) {
        let mut escaped = None;
        for (_entity, (bandit, target)) in self.world.query_mut::<(&Bandit, &mut Target)>() {
            if target.id() == target_id {
                if target.despawn_by_timeout(handle, &mut self.pool) {
                    escaped = Some(bandit.name.clone());
                }
                break;
            }
        }
        if let Some(name) = escaped {
            self.on_escape(target_id, name);
        }
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                tracing::warn!(%err, "command rejected");
            }
        }
    }

    fn require_active(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::Active {
            Ok(())
        } else {
            Err(CommandError::NoActiveRound { phase: self.phase })
        }
    }

    fn all_dead(&self) -> bool {
        self.world
            .query::<&Target>()
            .iter()
            .all(|(_, target)| target.is_dead())
    }

    fn bandit_name(&self, target_id: u32) -> String {
        self.world
            .query::<(&Bandit, &Target)>()
            .iter()
            .find(|(_, (_, target))| target.id() == target_id)
            .map(|(_, (bandit, _))| bandit.name.clone())
            .unwrap_or_default()
    }

    fn push_ammo_changed(&mut self) {
        self.events.push(GameEvent::AmmoChanged {
            remaining: self.cylinder.remaining(),
            capacity: self.cylinder.capacity(),
        });
    }

    fn push_log(&mut self, message: String) {
        let started_at_ms = self.round.as_ref().map_or(0, |r| r.started_at_ms);
        let entry = LogEntry {
            message,
            at_ms: self.now().saturating_sub(started_at_ms),
        };
        self.log.push_front(entry.clone());
        self.log.truncate(LOG_CAPACITY);
        self.events.push(GameEvent::Log(entry));
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.round.as_ref(),
            &self.cylinder,
            &self.pool,
            &self.log,
            events,
            self.summary,
        )
    }

    /// Slot bookkeeping and per-bandit state are consistent.
    pub fn invariants_hold(&self) -> bool {
        let mut on_screen = 0;
        for (_, target) in self.world.query::<&Target>().iter() {
            let consistent = match target.state() {
                TargetState::OnScreen => {
                    on_screen += 1;
                    target.position().is_some() && target.remaining_lives() > 0
                }
                TargetState::Dead => {
                    target.position().is_none() && target.remaining_lives() == 0
                }
                TargetState::Inactive => {
                    target.position().is_none() && target.remaining_lives() > 0
                }
            };
            if !consistent {
                return false;
            }
        }
        self.pool.len() + on_screen == BANDIT_POSITIONS.len()
    }

    fn now(&self) -> u64 {
        self.time.elapsed_ms
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    pub fn cylinder(&self) -> &Cylinder {
        &self.cylinder
    }

    pub fn pool(&self) -> &PositionPool {
        &self.pool
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replace the cylinder (for tests that need a specific round count).
    #[cfg(test)]
    pub fn set_cylinder(&mut self, cylinder: Cylinder) {
        self.cylinder = cylinder;
    }
}
