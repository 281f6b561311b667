//! Uniform selection from a finite set. All randomness in the engine goes through here.

use rand::Rng;

/// Pick an index in `0..len` uniformly at random. `None` for an empty set.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}
