//! Quickdraw console host.
//!
//! Runs the round controller on its own thread at real-time speed and
//! exposes it through a line-oriented command protocol and a presenter.

pub mod game_loop;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod state;

pub use quickdraw_core as core;
