//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Facing;

/// The player-controlled emu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub facing: Facing,
    /// Pixels moved per direction input.
    pub speed: f64,
    /// Ticks left on the cosmetic "moving" pulse.
    pub moving_ticks: u32,
    /// Ticks left on the cosmetic "hit" pulse.
    pub hit_ticks: u32,
}

/// A destructible crop. `destroyed` only ever goes false -> true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub destroyed: bool,
}

/// A stationary soldier that fires volleys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Emitter {
    pub id: u32,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique for the lifetime of the engine, across matches.
    pub id: u64,
}

/// A wandering emu that can draw emitter fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decoy {
    pub id: u32,
}

// Position and Velocity from types.rs double as components.
