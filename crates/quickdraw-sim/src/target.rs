//! Bandit target lifecycle.
//!
//! `Inactive -> OnScreen -> Inactive | Dead`. `Dead` is terminal. The target
//! owns only logical state; whoever renders it listens to engine events.

use rand::Rng;

use quickdraw_core::enums::{HitOutcome, TargetState};
use quickdraw_core::types::Position;

use crate::ammo::Cylinder;
use crate::pool::PositionPool;
use crate::timers::{TimerHandle, TimerKind, TimerQueue};

/// Lifecycle component of a bandit entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    id: u32,
    max_lives: u32,
    remaining_lives: u32,
    state: TargetState,
    position: Option<Position>,
    /// Armed while on screen; a hit cancels it.
    despawn_timer: Option<TimerHandle>,
}

impl Target {
    /// A fresh bandit with full lives. Zero lives starts out dead.
    pub fn new(id: u32, lives: u32) -> Self {
        Self {
            id,
            max_lives: lives,
            remaining_lives: lives,
            state: if lives == 0 {
                TargetState::Dead
            } else {
                TargetState::Inactive
            },
            position: None,
            despawn_timer: None,
        }
    }

    /// Put the bandit on screen at a random free slot and arm its despawn
    /// timer for `despawn_at_ms`. No-op (false) when dead, already on screen,
    /// or no slot is free.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        pool: &mut PositionPool,
        rng: &mut R,
        timers: &mut TimerQueue,
        despawn_at_ms: u64,
    ) -> bool {
        if self.state != TargetState::Inactive {
            return false;
        }
        let Some(position) = pool.take_random(rng) else {
            return false;
        };

        self.state = TargetState::OnScreen;
        self.position = Some(position);
        self.despawn_timer = Some(timers.schedule(
            despawn_at_ms,
            TimerKind::Despawn { target_id: self.id },
        ));
        true
    }

    /// Despawn timer fired. Returns true when the bandit escaped.
    ///
    /// Ignored unless `handle` is the timer currently armed on this bandit,
    /// so a stale timer from an earlier spawn can never pull it off screen.
    pub fn despawn_by_timeout(&mut self, handle: TimerHandle, pool: &mut PositionPool) -> bool {
        if self.state != TargetState::OnScreen || self.despawn_timer != Some(handle) {
            return false;
        }
        self.despawn_timer = None;
        self.leave_screen(pool);
        true
    }

    /// Shoot at the bandit.
    ///
    /// `None` when it is not on screen: there is nothing to click, and the
    /// cylinder is untouched. `NoAmmo` when the cylinder is empty. Otherwise
    /// the bandit leaves the screen regardless of remaining lives.
    pub fn register_hit(
        &mut self,
        cylinder: &mut Cylinder,
        pool: &mut PositionPool,
        timers: &mut TimerQueue,
    ) -> Option<HitOutcome> {
        if self.state != TargetState::OnScreen {
            return None;
        }
        if !cylinder.fire() {
            return Some(HitOutcome::NoAmmo);
        }

        if let Some(handle) = self.despawn_timer.take() {
            timers.cancel(handle);
        }
        self.leave_screen(pool);

        self.remaining_lives = self.remaining_lives.saturating_sub(1);
        if self.remaining_lives == 0 {
            self.state = TargetState::Dead;
            Some(HitOutcome::Kill)
        } else {
            Some(HitOutcome::Wounded)
        }
    }

    fn leave_screen(&mut self, pool: &mut PositionPool) {
        self.state = TargetState::Inactive;
        if let Some(position) = self.position.take() {
            pool.release(position);
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == TargetState::Dead
    }

    pub fn is_on_screen(&self) -> bool {
        self.state == TargetState::OnScreen
    }

    /// Eligible for the next spawn: alive and off screen.
    pub fn is_eligible(&self) -> bool {
        self.state == TargetState::Inactive
    }

    pub fn remaining_lives(&self) -> u32 {
        self.remaining_lives
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn despawn_timer(&self) -> Option<TimerHandle> {
        self.despawn_timer
    }
}
