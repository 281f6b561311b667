//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Lifecycle logic lives in the sim crate.

use serde::{Deserialize, Serialize};

/// Identity of a bandit entity. Stable for the whole round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bandit {
    pub name: String,
    /// Opaque sprite handle.
    pub sprite: String,
}
