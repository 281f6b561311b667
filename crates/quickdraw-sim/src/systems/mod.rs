//! Systems that operate on the round's world.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state beyond what the controller hands them.

pub mod snapshot;
pub mod spawn_scheduler;
