//! Timer queue driven by simulation time.
//!
//! Replaces wall-clock callbacks with explicit, cancellable handles. Every
//! handle carries the queue generation it was scheduled in; `invalidate_all`
//! bumps the generation so nothing scheduled before it can ever fire.

use std::collections::BTreeMap;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Periodic spawn scheduler tick.
    SpawnTick,
    /// A bandit's on-screen time ran out.
    Despawn { target_id: u32 },
}

/// Identifies one scheduled timer. Orders by due time, then scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle {
    pub due_ms: u64,
    seq: u64,
    generation: u32,
}

impl TimerHandle {
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<TimerHandle, TimerKind>,
    next_seq: u64,
    generation: u32,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer firing at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle {
            due_ms,
            seq: self.next_seq,
            generation: self.generation,
        };
        self.next_seq += 1;
        self.pending.insert(handle, kind);
        handle
    }

    /// Disarm a timer. Returns false if it already fired or was never armed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Pop the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerHandle, TimerKind)> {
        loop {
            let next = *self.pending.first_key_value()?.0;
            if next.due_ms > now_ms {
                return None;
            }
            let (handle, kind) = self.pending.pop_first()?;
            if handle.generation == self.generation {
                return Some((handle, kind));
            }
        }
    }

    /// Drop every pending timer and start a new generation.
    pub fn invalidate_all(&mut self) {
        self.pending.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether `handle` is still armed in the current generation.
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        handle.generation == self.generation && self.pending.contains_key(&handle)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
