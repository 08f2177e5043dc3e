//! Combat system: emitter volleys aimed at the player or a decoy.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use emuwar_core::components::{Decoy, Emitter, Projectile};
use emuwar_core::constants::{MUZZLE_OFFSET, PROJECTILE_SPEED};
use emuwar_core::events::GameEvent;
use emuwar_core::types::{Position, Velocity};

use super::find_player;

/// Fire one projectile from every emitter. Returns how many were spawned.
///
/// Each emitter independently picks the player or one of the decoys with
/// equal weight. An emitter sitting exactly on its pick holds fire.
pub fn fire_volley(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u64,
    events: &mut Vec<GameEvent>,
) -> usize {
    let candidates = collect_candidates(world);
    if candidates.is_empty() {
        return 0;
    }

    let mut emitters: Vec<(u32, Position)> = world
        .query::<(&Emitter, &Position)>()
        .iter()
        .map(|(_, (emitter, pos))| (emitter.id, *pos))
        .collect();
    emitters.sort_by_key(|(id, _)| *id);

    let mut fired = 0;
    for (emitter_id, origin) in emitters {
        let aim = candidates[rng.gen_range(0..candidates.len())];

        let Some(velocity) = aim_velocity(&origin, &aim) else {
            debug!(emitter_id, "emitter on top of its target, holding fire");
            continue;
        };

        let projectile_id = *next_projectile_id;
        *next_projectile_id += 1;

        let muzzle = Position::new(origin.x + MUZZLE_OFFSET.0, origin.y + MUZZLE_OFFSET.1);
        world.spawn((Projectile { id: projectile_id }, muzzle, velocity));
        trace!(
            emitter_id,
            projectile_id,
            vx = velocity.x,
            vy = velocity.y,
            speed = velocity.speed(),
            "projectile fired"
        );

        events.push(GameEvent::ProjectileFired {
            projectile_id,
            emitter_id,
        });
        fired += 1;
    }
    fired
}

/// Velocity of `PROJECTILE_SPEED` pointing from `origin` to `target`.
/// `None` when the two coincide and there is no direction to normalise.
pub fn aim_velocity(origin: &Position, target: &Position) -> Option<Velocity> {
    origin
        .offset_to(target)
        .try_normalize()
        .map(|dir| Velocity::from(dir * PROJECTILE_SPEED))
}

/// Player first, then decoys by id.
fn collect_candidates(world: &World) -> Vec<Position> {
    let mut decoys: Vec<(u32, Position)> = world
        .query::<(&Decoy, &Position)>()
        .iter()
        .map(|(_, (decoy, pos))| (decoy.id, *pos))
        .collect();
    decoys.sort_by_key(|(id, _)| *id);

    find_player(world)
        .map(|(_, pos)| pos)
        .into_iter()
        .chain(decoys.into_iter().map(|(_, pos)| pos))
        .collect()
}
