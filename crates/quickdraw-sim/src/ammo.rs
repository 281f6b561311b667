//! Revolver cylinder: a fixed number of rounds between reloads.

use quickdraw_core::constants::CYLINDER_CAPACITY;
use quickdraw_core::state::AmmoView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cylinder {
    capacity: u32,
    remaining: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::full(CYLINDER_CAPACITY)
    }
}

impl Cylinder {
    /// A loaded cylinder.
    pub fn full(capacity: u32) -> Self {
        Self {
            capacity,
            remaining: capacity,
        }
    }

    /// A cylinder with `remaining` rounds, clamped to capacity.
    pub fn with_remaining(capacity: u32, remaining: u32) -> Self {
        Self {
            capacity,
            remaining: remaining.min(capacity),
        }
    }

    /// Spend one round. False when empty; nothing changes.
    pub fn fire(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn reload(&mut self) {
        self.remaining = self.capacity;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn view(&self) -> AmmoView {
        AmmoView {
            remaining: self.remaining,
            capacity: self.capacity,
        }
    }
}
