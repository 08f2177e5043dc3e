//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

use hecs::{Entity, World};

use emuwar_core::components::Player;
use emuwar_core::types::Position;

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod input;
pub mod movement;
pub mod pulse;
pub mod snapshot;

/// Locate the player entity and its position.
pub(crate) fn find_player(world: &World) -> Option<(Entity, Position)> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, pos))| (entity, *pos))
}
