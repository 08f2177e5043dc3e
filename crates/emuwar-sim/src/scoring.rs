//! Match counters: score, lives, and targets destroyed.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use emuwar_core::constants::STARTING_LIVES;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    /// Saturates at zero; never observed negative.
    pub lives: u32,
    pub targets_destroyed: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            targets_destroyed: 0,
        }
    }
}
