//! Motion system.
//!
//! Projectiles integrate position += velocity once per tick (no dt scaling,
//! the tick rate is fixed). Decoys take an occasional random step.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emuwar_core::components::{Decoy, Projectile};
use emuwar_core::constants::*;
use emuwar_core::types::{Position, Velocity};

/// Advance every projectile by its velocity.
pub fn run_projectiles(world: &mut World) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Give each decoy a `DECOY_MOVE_CHANCE` chance to step `DECOY_SPEED` pixels
/// in a uniformly random direction, then clamp it back into the arena.
pub fn run_decoys(world: &mut World, rng: &mut ChaCha8Rng) {
    let max = DVec2::new(ARENA_WIDTH - DECOY_EXTENT, ARENA_HEIGHT - DECOY_EXTENT);

    for (_entity, (_decoy, pos)) in world.query_mut::<(&Decoy, &mut Position)>() {
        if !rng.gen_bool(DECOY_MOVE_CHANCE) {
            continue;
        }
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let step = DVec2::from_angle(angle) * DECOY_SPEED;
        *pos = (pos.as_dvec2() + step).clamp(DVec2::ZERO, max).into();
    }
}
