//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are applied as soon as the engine receives them; the engine
//! ignores any command that does not fit the current phase.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a new match.
    Start,
    /// Step the player one unit in a direction.
    Move { direction: Direction },
    /// Return to the instructions screen with a fresh world.
    Reset,
}
