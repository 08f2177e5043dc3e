//! Cleanup system: removes projectiles that left the arena.

use hecs::{Entity, World};

use emuwar_core::components::Projectile;
use emuwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use emuwar_core::types::Position;

/// Despawn every projectile outside `[0, ARENA_WIDTH] x [0, ARENA_HEIGHT]`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number of projectiles removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if !pos.is_within(ARENA_WIDTH, ARENA_HEIGHT) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
