//! Spawn scheduler: periodically puts a random eligible bandit on screen.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use quickdraw_core::types::Position;

use crate::pool::PositionPool;
use crate::random::pick_index;
use crate::target::Target;
use crate::timers::{TimerHandle, TimerKind, TimerQueue};

/// Periodic timer state. The period comes from the round's difficulty profile.
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    interval_ms: u64,
    timer: Option<TimerHandle>,
}

/// What a scheduler tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnTick {
    Spawned { target_id: u32, position: Position },
    /// Live bandits exist but none can spawn right now.
    Idle,
    /// Every bandit is dead.
    AllDead,
}

impl SpawnScheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            timer: None,
        }
    }

    /// Arm the first tick one period after `now_ms`.
    pub fn start(&mut self, timers: &mut TimerQueue, now_ms: u64) {
        self.stop(timers);
        self.timer = Some(timers.schedule(now_ms + self.interval_ms, TimerKind::SpawnTick));
    }

    pub fn stop(&mut self, timers: &mut TimerQueue) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
    }

    /// Whether `handle` is this scheduler's pending tick.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Schedule the tick after `fired`, anchored to its due time so the
    /// period does not drift with the host's tick length.
    pub fn rearm(&mut self, timers: &mut TimerQueue, fired: TimerHandle) {
        self.timer = Some(timers.schedule(fired.due_ms + self.interval_ms, TimerKind::SpawnTick));
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

/// One scheduler tick: pick a random eligible bandit and spawn it.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pool: &mut PositionPool,
    timers: &mut TimerQueue,
    despawn_at_ms: u64,
) -> SpawnTick {
    let mut eligible: Vec<u32> = world
        .query_mut::<&Target>()
        .into_iter()
        .filter(|(_, target)| target.is_eligible())
        .map(|(_, target)| target.id())
        .collect();

    if eligible.is_empty() {
        let all_dead = world
            .query_mut::<&Target>()
            .into_iter()
            .all(|(_, target)| target.is_dead());
        return if all_dead {
            SpawnTick::AllDead
        } else {
            SpawnTick::Idle
        };
    }

    // Fixed order so a seed always picks the same bandit.
    eligible.sort_unstable();
    let Some(index) = pick_index(rng, eligible.len()) else {
        return SpawnTick::Idle;
    };
    let chosen = eligible[index];

    for (_entity, target) in world.query_mut::<&mut Target>() {
        if target.id() != chosen {
            continue;
        }
        if target.spawn(pool, rng, timers, despawn_at_ms) {
            if let Some(position) = target.position() {
                return SpawnTick::Spawned {
                    target_id: chosen,
                    position,
                };
            }
        }
        break;
    }
    SpawnTick::Idle
}
