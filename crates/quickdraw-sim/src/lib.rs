//! Game engine for QUICKDRAW.
//!
//! Owns the hecs world of bandits, runs the spawn scheduler and despawn
//! timers in simulation time, resolves shots, and produces
//! GameStateSnapshots for the presentation layer.

pub mod ammo;
pub mod engine;
pub mod pool;
pub mod random;
pub mod systems;
pub mod target;
pub mod timers;
pub mod world_setup;

pub use engine::{RoundController, RoundSetup, SimConfig};
pub use quickdraw_core as core;
