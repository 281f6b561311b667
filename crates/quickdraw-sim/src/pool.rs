//! Spawn slot pool: positions not currently held by an on-screen bandit.

use rand::Rng;

use quickdraw_core::constants::BANDIT_POSITIONS;
use quickdraw_core::types::Position;

use crate::random::pick_index;

/// The set of free spawn slots. Order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct PositionPool {
    available: Vec<Position>,
}

impl PositionPool {
    pub fn new(all: &[Position]) -> Self {
        Self {
            available: all.to_vec(),
        }
    }

    /// Pool holding every preset slot.
    pub fn with_presets() -> Self {
        Self::new(&BANDIT_POSITIONS)
    }

    /// Remove and return a uniformly random free slot.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let index = pick_index(rng, self.available.len())?;
        Some(self.available.swap_remove(index))
    }

    /// Return a slot to the pool.
    ///
    /// # Panics
    /// If the slot is already free: two holders means the bookkeeping is broken.
    pub fn release(&mut self, position: Position) {
        assert!(
            !self.contains(&position),
            "position {position:?} released twice"
        );
        self.available.push(position);
    }

    /// Make every slot in `all` free again.
    pub fn reset(&mut self, all: &[Position]) {
        self.available.clear();
        self.available.extend_from_slice(all);
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.available.contains(position)
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}
