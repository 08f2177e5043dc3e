//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, the target grid, emitters, and decoys with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emuwar_core::components::*;
use emuwar_core::constants::*;
use emuwar_core::enums::Facing;
use emuwar_core::types::Position;

/// Replace the whole world with a fresh match population.
/// Calling it twice in a row leaves exactly one population.
pub fn setup_match(world: &mut World, rng: &mut ChaCha8Rng) {
    world.clear();
    spawn_player(world);
    spawn_targets(world, rng);
    spawn_emitters(world);
    spawn_decoys(world);
}

/// Spawn the player at the start position, facing right.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player {
            facing: Facing::Right,
            speed: PLAYER_SPEED,
            moving_ticks: 0,
            hit_ticks: 0,
        },
        Position::new(PLAYER_START.0, PLAYER_START.1),
    ))
}

/// Spawn the target grid: 5 columns, jittered inside each cell.
pub fn spawn_targets(world: &mut World, rng: &mut ChaCha8Rng) {
    for id in 0..TARGET_COUNT {
        let column = (id % TARGET_GRID_COLUMNS) as f64;
        let row = (id / TARGET_GRID_COLUMNS) as f64;

        let x = column * TARGET_GRID_PITCH.0 + TARGET_GRID_OFFSET.0
            + rng.gen_range(0.0..TARGET_JITTER.0);
        let y = row * TARGET_GRID_PITCH.1 + TARGET_GRID_OFFSET.1
            + rng.gen_range(0.0..TARGET_JITTER.1);

        spawn_target(world, id, Position::new(x, y));
    }
}

pub fn spawn_target(world: &mut World, id: u32, position: Position) -> hecs::Entity {
    world.spawn((
        Target {
            id,
            destroyed: false,
        },
        position,
    ))
}

/// Spawn the three emitters at their fixed posts. Ids start at 1.
pub fn spawn_emitters(world: &mut World) {
    for (i, &(x, y)) in EMITTER_POSITIONS.iter().enumerate() {
        spawn_emitter(world, i as u32 + 1, Position::new(x, y));
    }
}

pub fn spawn_emitter(world: &mut World, id: u32, position: Position) -> hecs::Entity {
    world.spawn((Emitter { id }, position))
}

/// Spawn the four decoys at their start positions. Ids start at 1.
pub fn spawn_decoys(world: &mut World) {
    for (i, &(x, y)) in DECOY_POSITIONS.iter().enumerate() {
        spawn_decoy(world, i as u32 + 1, Position::new(x, y));
    }
}

pub fn spawn_decoy(world: &mut World, id: u32, position: Position) -> hecs::Entity {
    world.spawn((Decoy { id }, position))
}
