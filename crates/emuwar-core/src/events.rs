//! Events emitted by the simulation for view-layer feedback.
//!
//! Events are edge-triggered: each one is reported in exactly one snapshot,
//! so a view can flash a sprite or play an effect without keeping timers.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The phase state machine took an edge.
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A direction input moved the player.
    PlayerMoved,
    /// The player ran over a target.
    TargetDestroyed { target_id: u32 },
    /// A projectile struck the player.
    PlayerHit { lives_remaining: u32 },
    /// An emitter fired.
    ProjectileFired { projectile_id: u64, emitter_id: u32 },
}
