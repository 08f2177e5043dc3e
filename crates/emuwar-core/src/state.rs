//! Game state snapshot: the complete visible state handed to the view layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state published after each tick, volley, or command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub targets_destroyed: u32,
    pub player: PlayerView,
    /// Sorted by id.
    pub targets: Vec<TargetView>,
    pub emitters: Vec<EmitterView>,
    pub decoys: Vec<DecoyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub facing: Facing,
    /// Lit for a short while after a successful input step.
    pub moving: bool,
    /// Lit for a short while after a projectile hit.
    pub hit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Position,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterView {
    pub id: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoyView {
    pub id: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
}
